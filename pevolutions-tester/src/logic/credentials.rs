//! Deterministic test identities derived from a seed.
use anyhow::{Result, bail};
use pevolutions_core::{COUNTRIES, RegisterForm};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const TRAINER_NAMES: &[&str] = &[
    "Ash", "Misty", "Brock", "Gary", "Dawn", "May", "Serena", "Cilan", "Iris", "Lillie",
];
const PASSWORD_ALPHABET: &[u8] =
    b"abcdefghijkmnpqrstuvwxyzABCDEFGHJKLMNPQRSTUVWXYZ23456789!#$%&*+-=?@";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub email: String,
    pub password: String,
    pub country: String,
}

impl Credentials {
    /// Same seed, same identity.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let name = TRAINER_NAMES[rng.gen_range(0..TRAINER_NAMES.len())];
        let suffix: u16 = rng.gen_range(0..10_000);
        let username = format!("{name}{suffix:04}");
        let email = format!("{}@example.com", username.to_lowercase());

        let len = rng.gen_range(4..=24);
        let password = (0..len)
            .map(|_| char::from(PASSWORD_ALPHABET[rng.gen_range(0..PASSWORD_ALPHABET.len())]))
            .collect();

        let country = COUNTRIES[rng.gen_range(0..COUNTRIES.len())].code.to_string();

        Self {
            username,
            email,
            password,
            country,
        }
    }

    #[must_use]
    pub fn register_form(&self) -> RegisterForm {
        RegisterForm {
            username: self.username.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            confirm_password: self.password.clone(),
            country: Some(self.country.clone()),
        }
    }
}

/// Parse `--seeds` tokens. Negative values are folded to their magnitude.
pub fn resolve_seeds(tokens: &[String]) -> Result<Vec<u64>> {
    let mut seeds = Vec::with_capacity(tokens.len());
    for token in tokens {
        if let Ok(value) = token.parse::<u64>() {
            seeds.push(value);
        } else if let Ok(value) = token.parse::<i64>() {
            seeds.push(value.unsigned_abs());
        } else {
            bail!("Invalid seed '{token}': expected an integer");
        }
    }
    if seeds.is_empty() {
        bail!("At least one seed is required");
    }
    Ok(seeds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pevolutions_core::CountryCode;

    #[test]
    fn identities_are_deterministic_per_seed() {
        assert_eq!(Credentials::from_seed(7), Credentials::from_seed(7));
        assert_ne!(
            Credentials::from_seed(7).username,
            Credentials::from_seed(8).username
        );
    }

    #[test]
    fn identities_are_always_registrable() {
        for seed in 0..200 {
            let creds = Credentials::from_seed(seed);
            assert!(!creds.username.trim().is_empty());
            assert!((4..=24).contains(&creds.password.len()));
            assert!(CountryCode::parse(&creds.country).is_ok());
            let form = creds.register_form();
            assert_eq!(form.password, form.confirm_password);
        }
    }

    #[test]
    fn resolves_numeric_seeds() {
        let tokens = vec!["1337".to_string(), "-5".to_string()];
        assert_eq!(resolve_seeds(&tokens).unwrap(), vec![1337, 5]);
        assert!(resolve_seeds(&["pallet".to_string()]).is_err());
        assert!(resolve_seeds(&[]).is_err());
    }
}
