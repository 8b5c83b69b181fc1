//! Translate command - one-shot translation from the command line

use anyhow::Context;
use clap::Args;
use tracing::warn;

use crate::config::AppConfig;
use crate::infrastructure::logging;

#[derive(Debug, Args)]
pub struct TranslateArgs {
    /// Portuguese sentence to translate
    pub text: String,

    /// Do not play the gestures on the avatar
    #[arg(long)]
    pub skip_animation: bool,
}

/// Translate one sentence and print one gesture per line
pub async fn run(args: TranslateArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let mut config = AppConfig::load().context("Failed to load configuration")?;
    if args.skip_animation {
        config.animation.enabled = false;
    }
    logging::init_logging(&config.logging)?;

    let state = crate::create_app_state_with_config(&config).await?;
    let result = state.translator.translate(&args.text).await;

    if result.is_degraded() {
        for failure in result.failures() {
            warn!(stage = ?failure.stage, error = %failure.message, "Translation degraded");
        }
    }

    if let Some(animator) = &state.animator {
        animator
            .play(&result.gestures())
            .await
            .context("Avatar animation failed")?;
    }

    for gesture in result.gestures() {
        println!("{}", gesture);
    }

    Ok(())
}
