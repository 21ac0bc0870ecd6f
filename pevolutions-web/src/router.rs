use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/downloads")]
    Downloads,
    #[at("/forum")]
    Forum,
    #[at("/community")]
    Community,
    #[at("/support")]
    Support,
    #[at("/online-players")]
    OnlinePlayers,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/account")]
    Account,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    /// Routes that only make sense with an active session.
    #[must_use]
    pub const fn requires_session(&self) -> bool {
        matches!(self, Self::Account)
    }

    /// Routes that bounce an already signed-in visitor to the dashboard.
    #[must_use]
    pub const fn guest_only(&self) -> bool {
        matches!(self, Self::Login | Self::Register)
    }

    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Downloads => "Downloads",
            Self::Forum => "Forum",
            Self::Community => "Community",
            Self::Support => "Support",
            Self::OnlinePlayers => "Online Players",
            Self::Login => "Login",
            Self::Register => "Register",
            Self::Account => "Dashboard",
            Self::NotFound => "Not Found",
        }
    }
}
