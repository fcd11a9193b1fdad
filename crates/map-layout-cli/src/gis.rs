//! Runs the GIS region and projection commands
//!
//! The commands print plain text; parsing is left to the library.

use anyhow::{Context, Result, bail};
use map_layout::{ProjectionInfo, Region, RegionQuery, RegionRequest};
use tokio::process::Command;

const REGION_COMMAND: &str = "g.region";
const PROJECTION_COMMAND: &str = "g.proj";

pub struct GisCommands {
    /// Wrapper such as `grass --exec`, run in front of every command
    prefix: Vec<String>,
}

impl GisCommands {
    pub fn new(prefix: Vec<String>) -> Self {
        Self { prefix }
    }

    fn command(&self, program: &str, args: &[String]) -> Command {
        let mut command = match self.prefix.split_first() {
            Some((wrapper, wrapper_args)) => {
                let mut command = Command::new(wrapper);
                command.args(wrapper_args).arg(program);
                command
            }
            None => Command::new(program),
        };
        command.args(args);
        command
    }

    async fn read_command(&self, program: &str, args: &[String]) -> Result<String> {
        log::debug!("Running {} {}", program, args.join(" "));

        let output = self
            .command(program, args)
            .output()
            .await
            .with_context(|| format!("Failed to run {}", program))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!("{} failed ({}): {}", program, output.status, stderr.trim());
        }

        String::from_utf8(output.stdout)
            .with_context(|| format!("{} printed invalid UTF-8", program))
    }

    pub async fn query_region(&self, query: &RegionQuery) -> Result<Region> {
        let text = self.read_command(REGION_COMMAND, &query.args()).await?;
        let region = Region::parse(&text).with_context(|| format!("Reading {:?}", query))?;
        log::info!(
            "Region for {:?}: n={} s={} e={} w={}",
            query,
            region.north,
            region.south,
            region.east,
            region.west
        );
        Ok(region)
    }

    pub async fn projection(&self) -> Result<ProjectionInfo> {
        let text = self
            .read_command(PROJECTION_COMMAND, &["-p".to_string()])
            .await?;
        let info = ProjectionInfo::parse(&text).context("Reading projection info")?;
        log::info!("Projection {} ({} m per unit)", info.proj, info.meters);
        Ok(info)
    }

    pub async fn set_region(&self, request: &RegionRequest) -> Result<()> {
        self.read_command(REGION_COMMAND, &request.to_args()).await?;
        log::info!("Region set: {}", request.to_args().join(" "));
        Ok(())
    }
}
