use clap::Parser;
use colored::*;
use eyre::{Context, Result, eyre};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

use firstwords::cli::{Cli, Command};
use firstwords::config::Config;
use firstwords::{
    AffirmationStyle, Choice, CreativeType, CreativeTypes, Feeling, FieldKey, Inspiration, Inspirations, IntroForm,
    Pick, Tone, Tones, classify_tones, pick_affirmation, select_template,
};

fn setup_logging() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
    Ok(())
}

/// Tick every pick, and bind the override if one was given
fn fill<K: FieldKey>(form: &mut IntroForm, key: K, picks: Vec<Pick<K::Value>>, other: Option<String>) {
    for pick in picks {
        form.toggle_multi(key, pick, true);
    }
    if let Some(text) = other {
        form.set_override(key, text);
    }
}

fn option_line<T: Choice>(title: &str) -> String {
    let labels: Vec<&str> = Pick::<T>::options().into_iter().map(Pick::<T>::label).collect();
    format!("{} {}", format!("{:<14}", title).bold(), labels.join(", "))
}

fn main() -> Result<()> {
    setup_logging().context("Failed to setup logging")?;

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    info!("firstwords starting");

    match cli.command {
        Command::Bio {
            types,
            inspirations,
            tones,
            description,
            other_type,
            other_inspiration,
            other_tone,
            verbose,
        } => {
            let mut form = IntroForm::new();
            fill(&mut form, CreativeTypes, types, other_type);
            fill(&mut form, Inspirations, inspirations, other_inspiration);
            fill(&mut form, Tones, tones, other_tone);
            form.set_description(description);

            if let Some(missing) = form.missing() {
                return Err(eyre!("Intro is not complete: {}", missing));
            }
            if verbose {
                let resolved = form.selection().resolve()?;
                let template = select_template(&classify_tones(&resolved.tones));
                println!("{} {}", "template:".dimmed(), template.to_string().cyan());
            }
            form.submit();
            if let Some(bio) = form.result() {
                println!("{}", bio);
            }
        }
        Command::Affirm { feeling, seed, simple } => {
            let style = if simple {
                AffirmationStyle::Simple
            } else {
                config.affirmations
            };
            let mut rng = match seed.or(config.seed) {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            let message = pick_affirmation(feeling, style, &mut rng);
            println!("{} {}", feeling.label().bold(), feeling.caption().dimmed());
            println!("{}", message.green());
        }
        Command::Feelings => {
            for feeling in Feeling::ALL {
                println!(
                    "{} {} {}",
                    format!("{:<12}", feeling.key()).cyan(),
                    format!("{:<8}", feeling.icon()).dimmed(),
                    feeling.caption()
                );
            }
        }
        Command::Options => {
            println!("{}", option_line::<CreativeType>("type"));
            println!("{}", option_line::<Inspiration>("inspiration"));
            println!("{}", option_line::<Tone>("tone"));
        }
    }

    Ok(())
}
