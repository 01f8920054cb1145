//! `pulseplan generate` and `pulseplan inputs`: collect inputs, run the
//! pipeline, render the plan.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

use pulseplan_core::inputs::{CampaignInputs, parse_inputs_toml};
use pulseplan_core::model::{CampaignGoal, Platform};
use pulseplan_core::plan::generate_plan;

use crate::config::{OutputFormat, PulseplanConfig};
use crate::render;

/// Flags for `pulseplan generate`. Each flag overrides the matching field of
/// the loaded inputs.
#[derive(Debug, Default, Args)]
pub struct GenerateArgs {
    /// Inputs TOML file (overrides PULSEPLAN_INPUTS and the config file)
    #[arg(long)]
    pub inputs: Option<PathBuf>,
    /// Brand name
    #[arg(long)]
    pub brand: Option<String>,
    /// What the brand sells
    #[arg(long)]
    pub offering: Option<String>,
    /// What makes the brand different
    #[arg(long)]
    pub differentiation: Option<String>,
    /// Free-text audience description
    #[arg(long)]
    pub audience: Option<String>,
    /// Brand tone
    #[arg(long)]
    pub tone: Option<String>,
    /// Campaign goal: awareness, engagement, conversion, retention
    #[arg(long)]
    pub goal: Option<CampaignGoal>,
    /// Budget intensity, 20-100 in steps of 5
    #[arg(long)]
    pub budget: Option<u32>,
    /// Campaign length in weeks, 4-10
    #[arg(long)]
    pub weeks: Option<u32>,
    /// Platform to run on; repeat to select several, in order
    #[arg(long = "platform")]
    pub platforms: Vec<Platform>,
    /// Output format (overrides PULSEPLAN_FORMAT and the config file)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
    /// Output file path (defaults to stdout)
    #[arg(long)]
    pub output: Option<PathBuf>,
}

impl GenerateArgs {
    /// Overlay the flags that were given onto `inputs`. A non-empty
    /// `--platform` list replaces the whole selection.
    pub fn apply(&self, inputs: &mut CampaignInputs) {
        if let Some(ref brand) = self.brand {
            inputs.brand_name.clone_from(brand);
        }
        if let Some(ref offering) = self.offering {
            inputs.offering.clone_from(offering);
        }
        if let Some(ref differentiation) = self.differentiation {
            inputs.differentiation.clone_from(differentiation);
        }
        if let Some(ref audience) = self.audience {
            inputs.audience.clone_from(audience);
        }
        if let Some(ref tone) = self.tone {
            inputs.tone.clone_from(tone);
        }
        if let Some(goal) = self.goal {
            inputs.goal = goal;
        }
        if let Some(budget) = self.budget {
            inputs.budget = budget;
        }
        if let Some(weeks) = self.weeks {
            inputs.campaign_length = weeks;
        }
        if !self.platforms.is_empty() {
            inputs.selected_platforms.clone_from(&self.platforms);
        }
    }
}

/// Read and validate an inputs file.
pub fn load_inputs_file(path: &Path) -> Result<CampaignInputs> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read inputs file {}", path.display()))?;
    parse_inputs_toml(&contents)
        .with_context(|| format!("invalid inputs file {}", path.display()))
}

/// Starter inputs or the resolved inputs file, with flag overrides applied
/// and the result validated.
pub fn collect_inputs(args: &GenerateArgs, config: &PulseplanConfig) -> Result<CampaignInputs> {
    let mut inputs = match config.inputs_path {
        Some(ref path) => load_inputs_file(path)?,
        None => CampaignInputs::default(),
    };
    args.apply(&mut inputs);
    inputs.validate().context("invalid campaign inputs")?;
    Ok(inputs)
}

fn open_output(output: Option<&Path>) -> Result<Box<dyn Write>> {
    Ok(match output {
        Some(path) => Box::new(
            std::fs::File::create(path)
                .with_context(|| format!("cannot create output file: {}", path.display()))?,
        ),
        None => Box::new(std::io::stdout().lock()),
    })
}

/// Run the generate command.
pub fn run_generate(args: &GenerateArgs) -> Result<()> {
    let config = PulseplanConfig::resolve(args.format, args.inputs.clone())?;
    debug!(format = %config.format, inputs = ?config.inputs_path, "config resolved");

    let inputs = collect_inputs(args, &config)?;
    let plan = generate_plan(&inputs).context("plan generation failed")?;

    let mut writer = open_output(args.output.as_deref())?;
    match config.format {
        OutputFormat::Text => render::write_text_report(&mut writer, &inputs.brand_name, &plan)?,
        OutputFormat::Json => render::write_json(&mut writer, &plan)?,
    }
    writer.flush()?;

    if let Some(ref path) = args.output {
        eprintln!("Plan written to {}", path.display());
    }
    Ok(())
}

/// Run the inputs command: write the starter inputs as TOML.
pub fn run_inputs(output: Option<&Path>) -> Result<()> {
    let contents = toml::to_string_pretty(&CampaignInputs::default())
        .context("failed to serialize starter inputs")?;

    let mut writer = open_output(output)?;
    write!(writer, "{contents}")?;
    writer.flush()?;

    if let Some(path) = output {
        eprintln!("Starter inputs written to {}", path.display());
    }
    Ok(())
}
