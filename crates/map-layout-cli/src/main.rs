mod gis;
mod logger;

use anyhow::{Context, Result, anyhow, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use gis::GisCommands;
use logger::StderrLogger;
use map_layout::{
    DesignerConfig, MapPoint, PaperPoint, ProjectionInfo, Rect, Region, RegionQuery,
    RegionRequest, Scale, ScalebarItem, ScalebarStyle, Unit, UnitConversion,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mlt", about = "Map layout geometry tools", version)]
struct Cli {
    /// Configuration file (JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Display density in pixels per inch, overrides the configuration
    #[arg(long, global = true)]
    ppi: Option<u32>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List known units
    Units {
        #[arg(long, value_enum, default_value = "all")]
        family: FamilyArg,
    },

    /// Convert a measurement between units
    Convert {
        /// Value to convert
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// Unit of the value
        from: String,
        /// Target unit
        to: String,
    },

    /// Fit a map frame to a region's aspect ratio
    Fit {
        /// Target rectangle in inches: x,y,width,height
        #[arg(long, value_parser = parse_rect)]
        rect: Rect,

        #[command(flatten)]
        geo: GeoArgs,
    },

    /// Convert a paper position (inches) to map coordinates
    PaperToMap {
        /// Map frame rectangle in inches: x,y,width,height
        #[arg(long, value_parser = parse_rect)]
        frame: Rect,

        #[arg(allow_hyphen_values = true)]
        x: f64,
        #[arg(allow_hyphen_values = true)]
        y: f64,

        #[command(flatten)]
        geo: GeoArgs,
    },

    /// Convert map coordinates to a paper position (inches)
    MapToPaper {
        /// Map frame rectangle in inches: x,y,width,height
        #[arg(long, value_parser = parse_rect)]
        frame: Rect,

        #[arg(allow_hyphen_values = true)]
        easting: f64,
        #[arg(allow_hyphen_values = true)]
        northing: f64,

        #[command(flatten)]
        geo: GeoArgs,
    },

    /// Compute the region shown by a frame at a fixed scale
    FixedRegion {
        /// Map frame rectangle in inches: x,y,width,height
        #[arg(long, value_parser = parse_rect)]
        frame: Rect,

        /// Scale denominator (the N of 1:N)
        #[arg(long)]
        scale: f64,

        /// Center in map units: easting,northing
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        center: MapPoint,

        /// Raster to align the region to
        #[arg(long)]
        align: Option<String>,

        /// Meters per map unit; queried from the GIS when omitted
        #[arg(long)]
        meters_per_unit: Option<f64>,

        /// Set the computed region with the GIS region command
        #[arg(long)]
        apply: bool,
    },

    /// Estimate the drawn size of a scale bar
    Scalebar {
        /// Ground length of the bar
        #[arg(long)]
        length: f64,

        /// Unit of the length; the projection's map units when omitted
        #[arg(long)]
        length_unit: Option<String>,

        /// Bar height
        #[arg(long, default_value = "0.1")]
        height: f64,

        #[arg(long, default_value = "inch")]
        height_unit: String,

        /// Scale denominator (the N of 1:N)
        #[arg(long)]
        scale: f64,

        /// Map unit name of the projection
        #[arg(long, default_value = "meters")]
        map_units: String,
    },

    /// Bounding box of a rotated rectangle
    RotateBbox {
        width: f64,
        height: f64,
        #[arg(allow_hyphen_values = true)]
        angle: f64,
    },
}

/// Where the region and projection come from
#[derive(Args)]
struct GeoArgs {
    /// Literal region: n=..,s=..,e=..,w=..
    #[arg(long, value_parser = parse_region, allow_hyphen_values = true, group = "source")]
    region: Option<Region>,

    /// Use the extent of a raster map
    #[arg(long, group = "source")]
    raster: Option<String>,

    /// Use the extent of a vector map
    #[arg(long, group = "source")]
    vector: Option<String>,

    /// Use a named saved region
    #[arg(long, group = "source")]
    saved_region: Option<String>,

    /// Meters per map unit; queried from the GIS when a map is used
    #[arg(long)]
    meters_per_unit: Option<f64>,
}

impl GeoArgs {
    fn query(&self) -> RegionQuery {
        if let Some(name) = &self.raster {
            RegionQuery::Raster(name.clone())
        } else if let Some(name) = &self.vector {
            RegionQuery::Vector(name.clone())
        } else if let Some(name) = &self.saved_region {
            RegionQuery::Saved(name.clone())
        } else {
            RegionQuery::Current
        }
    }

    async fn resolve(&self, gis: &GisCommands) -> Result<(Region, ProjectionInfo)> {
        let region = match self.region {
            Some(region) => region,
            None => gis.query_region(&self.query()).await?,
        };

        let projection = match self.meters_per_unit {
            Some(meters) => projected(meters)?,
            None if self.region.is_some() => ProjectionInfo::default(),
            None => gis.projection().await?,
        };

        Ok((region, projection))
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum FamilyArg {
    Page,
    Map,
    All,
}

fn projected(meters: f64) -> Result<ProjectionInfo> {
    if !(meters.is_finite() && meters > 0.0) {
        bail!("Meters per map unit must be positive, got {}", meters);
    }
    Ok(ProjectionInfo {
        proj: "custom".to_string(),
        units: String::new(),
        meters,
    })
}

fn parse_numbers<const N: usize>(s: &str) -> Result<[f64; N], String> {
    let values: Vec<f64> = s
        .split(',')
        .map(|part| map_layout::parse_number(part).map_err(|e| e.to_string()))
        .collect::<Result<_, _>>()?;
    values
        .try_into()
        .map_err(|_| format!("expected {} comma-separated numbers", N))
}

fn parse_rect(s: &str) -> Result<Rect, String> {
    let [x, y, width, height] = parse_numbers::<4>(s)?;
    Ok(Rect::new(x, y, width, height))
}

fn parse_point(s: &str) -> Result<MapPoint, String> {
    let [easting, northing] = parse_numbers::<2>(s)?;
    Ok(MapPoint::new(easting, northing))
}

fn parse_region(s: &str) -> Result<Region, String> {
    Region::parse(&s.replace(',', "\n")).map_err(|e| e.to_string())
}

fn scale_from_denominator(denominator: f64) -> Result<Scale> {
    Scale::from_denominator(denominator)
        .ok_or_else(|| anyhow!("Scale denominator must be positive, got {}", denominator))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    StderrLogger::new(StderrLogger::level_for(cli.verbose, cli.quiet))
        .init()
        .context("Failed to install logger")?;

    let config = match &cli.config {
        Some(path) => DesignerConfig::load(path)
            .await
            .with_context(|| format!("Loading {}", path.display()))?,
        None => DesignerConfig::default(),
    };
    let conv = match cli.ppi {
        Some(ppi) => UnitConversion::new(ppi),
        None => config.unit_conversion(),
    };
    let gis = GisCommands::new(config.gis_command_prefix.clone());
    log::debug!("Using {} pixels per inch", conv.pixels_per_inch());

    match cli.command {
        Commands::Units { family } => {
            let names = match family {
                FamilyArg::Page => conv.page_units(),
                FamilyArg::Map => conv.map_units(),
                FamilyArg::All => conv.all_units(),
            };
            for name in names {
                println!("{}", name);
            }
        }

        Commands::Convert { value, from, to } => {
            let converted = conv.convert_text(&value, &from, &to)?;
            println!("{}", converted);
        }

        Commands::Fit { rect, geo } => {
            let (region, projection) = geo.resolve(&gis).await?;
            let fit = map_layout::auto_adjust(&rect, &region, &projection, &conv)
                .ok_or_else(|| anyhow!("Region is empty or the rectangle has no area"))?;

            let one_inch = fit
                .scale
                .ground_distance(&conv, 1.0, Unit::Inch, config.map_unit);
            println!("Scale: 1:{:.0}", fit.scale.denominator());
            println!("  1 inch = {:.3} {}", one_inch, config.map_unit);
            println!(
                "Center: {} {}",
                fit.center.easting, fit.center.northing
            );
            println!(
                "Frame: x={:.4} y={:.4} width={:.4} height={:.4}",
                fit.rect.x, fit.rect.y, fit.rect.width, fit.rect.height
            );
        }

        Commands::PaperToMap { frame, x, y, geo } => {
            let (region, _) = geo.resolve(&gis).await?;
            let point = map_layout::paper_to_map(&frame, &region, PaperPoint::new(x, y))
                .ok_or_else(|| anyhow!("Region is empty or the frame has no area"))?;
            println!("{} {}", point.easting, point.northing);
        }

        Commands::MapToPaper {
            frame,
            easting,
            northing,
            geo,
        } => {
            let (region, _) = geo.resolve(&gis).await?;
            let point =
                map_layout::map_to_paper(&frame, &region, MapPoint::new(easting, northing))
                    .ok_or_else(|| anyhow!("Region is empty or the frame has no area"))?;
            println!("{} {}", point.x, point.y);
        }

        Commands::FixedRegion {
            frame,
            scale,
            center,
            align,
            meters_per_unit,
            apply,
        } => {
            let scale = scale_from_denominator(scale)?;
            let projection = match meters_per_unit {
                Some(meters) => projected(meters)?,
                None => gis.projection().await?,
            };
            let region =
                map_layout::region_from_fixed_scale(&frame, scale, center, &projection, &conv)
                    .ok_or_else(|| {
                        anyhow!("Frame has no area or meters per unit is not positive")
                    })?;
            let request = RegionRequest::new(region, align);

            println!("{}", request.to_args().join(" "));
            if apply {
                gis.set_region(&request).await?;
            }
        }

        Commands::Scalebar {
            length,
            length_unit,
            height,
            height_unit,
            scale,
            map_units,
        } => {
            let scalebar = ScalebarItem {
                rect: Rect::default(),
                length,
                units_length: length_unit.map(|u| u.parse::<Unit>()).transpose()?,
                height,
                units_height: height_unit.parse()?,
                segments: 4,
                style: ScalebarStyle::default(),
            };
            let projection = ProjectionInfo {
                units: map_units,
                ..Default::default()
            };
            let (length, height) =
                scalebar.estimate_size(&conv, scale_from_denominator(scale)?, &projection);
            println!("{:.4} x {:.4} in", length, height);
        }

        Commands::RotateBbox {
            width,
            height,
            angle,
        } => {
            let (w, h) = map_layout::bbox_after_rotation(width, height, angle);
            println!("{} {}", w, h);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rect() {
        assert_eq!(
            parse_rect("1, 2,3.5,4").unwrap(),
            Rect::new(1.0, 2.0, 3.5, 4.0)
        );
        assert!(parse_rect("1,2,3").is_err());
        assert!(parse_rect("1,2,x,4").is_err());
    }

    #[test]
    fn test_parse_region_literal() {
        let region = parse_region("n=100,s=0,e=200,w=-50").unwrap();
        assert_eq!(region, Region::new(100.0, 0.0, 200.0, -50.0));
        assert!(parse_region("n=100,s=0").is_err());
    }

    #[test]
    fn test_projected_rejects_non_positive_meters() {
        assert!(projected(0.0).is_err());
        assert!(projected(-0.3048).is_err());
        assert!(projected(f64::INFINITY).is_err());
        assert_eq!(projected(0.3048).unwrap().meters_per_unit(), 0.3048);
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_geo_source_is_exclusive() {
        let parsed = Cli::try_parse_from([
            "mlt",
            "fit",
            "--rect",
            "0,0,10,5",
            "--region",
            "n=1,s=0,e=1,w=0",
            "--raster",
            "elevation",
        ]);
        assert!(parsed.is_err());
    }
}
