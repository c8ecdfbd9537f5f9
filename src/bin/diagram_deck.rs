//! Builds the YTL Cement deck from pre-rendered diagram images.
//!
//! Each diagram slide gets a heading, the picture scaled to 7" high and
//! speaker notes. Images missing from the asset directory are skipped.
//!
//! Usage:
//!   diagram-deck --assets /workspaces/cockpit --output YTL_Cement_Presentation.pptx

use clap::Parser;
use deckhand::{DeckBuilder, DeckConfig};
use std::error::Error;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "diagram-deck",
    about = "Build the YTL Cement deck from rendered diagram images",
    version
)]
struct Args {
    /// Directory holding the rendered PNG diagrams
    #[arg(short, long, value_name = "DIR", default_value = "/workspaces/cockpit")]
    assets: PathBuf,

    /// Output .pptx file [default: <assets>/YTL_Cement_Presentation.pptx]
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// YAML file overriding the default house style
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

/// (heading, image file name, speaker notes)
const DIAGRAMS: [(&str, &str, &str); 10] = [
    (
        "Business Capability Map - Current State (AS-IS)",
        "YTL_Capability_Map_AS_IS.png",
        "Current state shows manual processes in RED with significant cost and risk issues",
    ),
    (
        "Business Capability Map - Target State (TO-BE)",
        "YTL_Capability_Map_TO_BE.png",
        "Target state shows automated processes in GREEN with MVP modules providing intelligence",
    ),
    (
        "Application Landscape - AS-IS vs TO-BE",
        "YTL_Application_Landscape.png",
        "Comparison of fragmented legacy systems vs integrated S/4HANA platform",
    ),
    (
        "Gap Analysis - 5 Major Gaps & Solutions",
        "YTL_Gap_Analysis.png",
        "5 critical gaps addressed by MVP modules with 10-16 month payback period",
    ),
    (
        "Data Flow Architecture",
        "YTL_Data_Flow.png",
        "End-to-end data flow from plant to marketing with MVP intelligence layer",
    ),
    (
        "Integration Architecture - Middleware & APIs",
        "YTL_Integration_Architecture.png",
        "Synchronous, asynchronous, and API integrations with SLA specifications",
    ),
    (
        "Technology Stack & Infrastructure",
        "YTL_Technology_Stack.png",
        "Complete technology stack from application layer to infrastructure deployment",
    ),
    (
        "Implementation Roadmap - 18 Week Phased Approach",
        "YTL_Implementation_Roadmap.png",
        "Phase 1 (Weeks 1-12) Foundation & Quick Wins, Phase 2 (Weeks 13-18) Optimization",
    ),
    (
        "Organization Structure & Stakeholder Matrix",
        "YTL_Organizational_View.png",
        "Project organization with 46 plant users + 3 marketing users in Phase 1",
    ),
    (
        "ROI & Annual Business Value",
        "YTL_ROI_Business_Value.png",
        "Total investment $810K-1,140K with $722K-1.2M annual benefit, 10-16 month payback",
    ),
];

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => DeckConfig::from_yaml_file(path)?,
        None => DeckConfig::default(),
    };
    let output = args
        .output
        .unwrap_or_else(|| args.assets.join("YTL_Cement_Presentation.pptx"));

    let mut deck = DeckBuilder::with_config(config);
    deck.add_title_slide(
        "YTL Cement - SAP S/4HANA Transformation",
        "Business Case & Technical Architecture\nGenerated with PlantUML",
    );
    for (title, image, notes) in DIAGRAMS {
        deck.add_diagram_slide(title, args.assets.join(image), notes)?;
    }

    deck.save(&output)?;

    println!("✓ PowerPoint presentation created: {}", output.display());
    println!("✓ Total slides: {}", deck.slide_count());
    Ok(())
}
