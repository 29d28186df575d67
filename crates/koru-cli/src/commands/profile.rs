use clap::{Subcommand, ValueEnum};
use koru_core::{Sex, StateRepository, UserProfile};

use super::open_store;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SexArg {
    Male,
    Female,
    Other,
    PreferNotToSay,
}

impl From<SexArg> for Sex {
    fn from(arg: SexArg) -> Self {
        match arg {
            SexArg::Male => Sex::Male,
            SexArg::Female => Sex::Female,
            SexArg::Other => Sex::Other,
            SexArg::PreferNotToSay => Sex::PreferNotToSay,
        }
    }
}

#[derive(Subcommand)]
pub enum ProfileAction {
    /// The resolved user id
    Whoami,
    /// Show the stored profile
    Show,
    /// Create or replace the profile and mark onboarding done
    Set {
        #[arg(long)]
        name: String,
        #[arg(long)]
        age: u8,
        #[arg(long, value_enum, default_value = "prefer-not-to-say")]
        sex: SexArg,
        /// Weight in kilograms
        #[arg(long)]
        weight: Option<f64>,
    },
    /// Whether onboarding has been completed
    Onboarding,
}

pub fn run(action: ProfileAction, user: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let (db, user) = open_store(user)?;
    let repo = StateRepository::new(&db, user);

    match action {
        ProfileAction::Whoami => {
            println!("{}", repo.user_id());
        }
        ProfileAction::Show => match repo.load_profile() {
            Some(profile) => println!("{}", serde_json::to_string_pretty(&profile)?),
            None => {
                eprintln!("no profile stored; run `profile set`");
                std::process::exit(1);
            }
        },
        ProfileAction::Set {
            name,
            age,
            sex,
            weight,
        } => {
            let profile = UserProfile {
                name,
                age,
                sex: sex.into(),
                weight,
            };
            repo.save_profile(&profile);
            repo.mark_onboarding_done();
            println!("profile saved");
        }
        ProfileAction::Onboarding => {
            println!("{}", repo.onboarding_done());
        }
    }
    Ok(())
}
