//! Config Tests
//!
//! Environment-driven configuration via `temp_env`.

use crate::brain::{Category, ResponseBank, Topic};
use crate::config::{
    AppConfig, LogFormat, ResponderKind, ENV_LOG_FORMAT, ENV_REPLY_DELAY_MS, ENV_RESPONDER,
    ENV_RESPONSES_PATH, ENV_RNG_SEED, ENV_TRANSCRIPT_PATH,
};
use crate::error::AppError;
use std::path::PathBuf;
use std::time::Duration;

const ALL_VARS: [&str; 6] = [
    ENV_REPLY_DELAY_MS,
    ENV_RESPONSES_PATH,
    ENV_RNG_SEED,
    ENV_TRANSCRIPT_PATH,
    ENV_LOG_FORMAT,
    ENV_RESPONDER,
];

#[cfg(test)]
mod config_env_tests {
    use super::*;

    #[test]
    fn test_unset_env_gives_defaults() {
        let unset: Vec<(&str, Option<&str>)> = ALL_VARS.iter().map(|k| (*k, None)).collect();
        temp_env::with_vars(unset, || {
            let config = AppConfig::from_env().unwrap();
            assert_eq!(config.reply_delay(), Duration::from_millis(1200));
            assert_eq!(config.log_format, LogFormat::Pretty);
            assert!(config.rng_seed.is_none());
            assert!(config.transcript_path.is_none());
            assert_eq!(config.responder, ResponderKind::Keyword);
        });
    }

    #[test]
    fn test_env_overrides() {
        temp_env::with_vars(
            vec![
                (ENV_REPLY_DELAY_MS, Some("0")),
                (ENV_RESPONSES_PATH, Some("/tmp/bank.json")),
                (ENV_RNG_SEED, Some("99")),
                (ENV_TRANSCRIPT_PATH, Some("/tmp/chat.json")),
                (ENV_LOG_FORMAT, Some("json")),
                (ENV_RESPONDER, Some("topic")),
            ],
            || {
                let config = AppConfig::from_env().unwrap();
                assert_eq!(config.reply_delay(), Duration::ZERO);
                assert_eq!(config.responses_path, Some(PathBuf::from("/tmp/bank.json")));
                assert_eq!(config.rng_seed, Some(99));
                assert_eq!(config.transcript_path, Some(PathBuf::from("/tmp/chat.json")));
                assert_eq!(config.log_format, LogFormat::Json);
                assert_eq!(config.responder, ResponderKind::Topic);
            },
        );
    }

    #[test]
    fn test_blank_values_ignored() {
        temp_env::with_vars(
            vec![(ENV_RESPONSES_PATH, Some("  ")), (ENV_RNG_SEED, Some(""))],
            || {
                let config = AppConfig::from_env().unwrap();
                assert!(config.responses_path.is_none());
                assert!(config.rng_seed.is_none());
            },
        );
    }

    #[test]
    fn test_bad_number_is_config_error() {
        temp_env::with_var(ENV_REPLY_DELAY_MS, Some("soon"), || {
            let err = AppConfig::from_env().unwrap_err();
            assert!(matches!(err, AppError::Config(ref msg) if msg.contains(ENV_REPLY_DELAY_MS)));
        });
    }

    #[test]
    fn test_unknown_responder_is_config_error() {
        temp_env::with_var(ENV_RESPONDER, Some("oracle"), || {
            let err = AppConfig::from_env().unwrap_err();
            assert!(matches!(err, AppError::Config(ref msg) if msg.contains("oracle")));
        });
    }

    #[test]
    fn test_delay_upper_bound() {
        temp_env::with_var(ENV_REPLY_DELAY_MS, Some("600000"), || {
            assert!(matches!(AppConfig::from_env(), Err(AppError::Config(_))));
        });
    }

    #[test]
    fn test_seeded_source_is_reproducible() {
        let config = AppConfig {
            rng_seed: Some(5),
            ..AppConfig::default()
        };
        let mut a = config.entropy_source();
        let mut b = config.entropy_source();
        for _ in 0..10 {
            assert_eq!(a.next_index(3), b.next_index(3));
        }
    }

    #[tokio::test]
    async fn test_build_responder_follows_kind() {
        let topic = AppConfig {
            responder: ResponderKind::Topic,
            ..AppConfig::default()
        };
        let reply = topic
            .build_responder(ResponseBank::builtin())
            .respond("How can I lower my cholesterol?")
            .await
            .unwrap();
        assert_eq!(reply, Topic::Cholesterol.answer());

        let keyword = AppConfig {
            rng_seed: Some(1),
            ..AppConfig::default()
        };
        let bank = ResponseBank::builtin();
        let reply = keyword
            .build_responder(bank.clone())
            .respond("How can I lower my cholesterol?")
            .await
            .unwrap();
        assert!(bank.candidates(Category::Default).contains(&reply));
    }
}
