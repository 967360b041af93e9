//! Check command implementation
//!
//! Validates one identity code or email address with the policy from the
//! configuration file, or the default policy when there is none.

use super::load_optional_config;
use crate::cli::exit_code;
use crate::validation::{ValidationOutcome, ValidationPolicy, Validator};
use clap::{Args, Subcommand};

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Print the outcome as JSON
    #[arg(long)]
    pub json: bool,

    #[command(subcommand)]
    pub target: CheckTarget,
}

/// What to check
#[derive(Subcommand, Debug)]
pub enum CheckTarget {
    /// Italian fiscal code (codice fiscale), 16 characters
    FiscalCode {
        code: String,

        /// Reject lowercase letters instead of uppercasing them
        #[arg(long)]
        strict_case: bool,
    },

    /// Health insurance card code (tessera sanitaria), 20 digits
    HealthCard {
        code: String,

        /// Expect the code without its leading zero
        #[arg(long)]
        no_leading_zero: bool,
    },

    /// Email address
    Email { text: String },
}

impl CheckArgs {
    /// Execute the check command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let base_policy = match load_optional_config(config_path) {
            Ok(config) => config.map(|c| c.validation).unwrap_or_default(),
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(exit_code::CONFIG_ERROR);
            }
        };

        let (label, outcome) = self.run(base_policy);
        tracing::debug!(
            target_kind = label,
            valid = outcome.is_valid,
            reason = outcome.reason.map(|r| r.tag()),
            "Check completed"
        );

        if self.json {
            println!("{}", serde_json::to_string(&outcome)?);
        } else if outcome.is_valid {
            println!("✅ Valid {label}");
        } else {
            println!("❌ Invalid {label}");
            if let Some(error) = &outcome.error {
                println!("   Reason: {error}");
            }
        }

        Ok(if outcome.is_valid {
            exit_code::SUCCESS
        } else {
            exit_code::FAILURE
        })
    }

    /// Apply the flags on top of `policy` and validate the target
    fn run(&self, policy: ValidationPolicy) -> (&'static str, ValidationOutcome) {
        match &self.target {
            CheckTarget::FiscalCode { code, strict_case } => {
                let policy = policy.with_normalize_case(policy.normalize_case && !strict_case);
                ("fiscal code", Validator::new(policy).fiscal_code(code))
            }
            CheckTarget::HealthCard {
                code,
                no_leading_zero,
            } => {
                let policy =
                    policy.with_leading_zero(policy.require_leading_zero && !no_leading_zero);
                ("health card code", Validator::new(policy).health_card(code))
            }
            CheckTarget::Email { text } => {
                ("email address", Validator::new(policy).email(text))
            }
        }
    }
}
