//! Builds the YTL Cement deck from native, editable PowerPoint shapes.
//!
//! Every diagram is made of rounded rectangles and note boxes rather than
//! pictures, so colours, text, positions and sizes stay editable.
//!
//! Usage:
//!   native-deck --output YTL_Cement_Native_PPT.pptx [--config deck.yaml]

use clap::Parser;
use deckhand::{DeckBuilder, DeckConfig, Rect, RgbColor, SlideBuilder};
use std::error::Error;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "native-deck",
    about = "Build the YTL Cement deck from native PowerPoint shapes",
    version
)]
struct Args {
    /// Output .pptx file
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "/workspaces/cockpit/YTL_Cement_Native_PPT.pptx"
    )]
    output: PathBuf,

    /// YAML file overriding the default house style
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

const WHITE: RgbColor = RgbColor::WHITE;
const CONTAINER: RgbColor = RgbColor(245, 245, 245);
const LEVEL_LABEL: RgbColor = RgbColor(240, 240, 240);
const STRATEGIC: RgbColor = RgbColor(255, 244, 230);

fn inches(left: f64, top: f64, width: f64, height: f64) -> Rect {
    Rect::inches(left, top, width, height)
}

/// Slide heading drawn as a white shape box.
fn heading(slide: &mut SlideBuilder<'_>, text: &str) {
    slide.add_shape_box(inches(0.5, 0.3, 15.0, 0.6), text, WHITE, 24.0, true);
}

/// Grey band naming one level of the capability map.
fn level_label(slide: &mut SlideBuilder<'_>, top: f64, text: &str, fill: RgbColor) {
    slide.add_shape_box(inches(0.7, top, 8.6, 0.4), text, fill, 11.0, true);
}

/// Container, strategic level and the capability-level band shared by both maps.
fn capability_map_frame(slide: &mut SlideBuilder<'_>) {
    slide.add_shape_box(inches(0.5, 1.0, 9.0, 7.0), "", CONTAINER, 10.0, false);

    level_label(slide, 1.2, "STRATEGIC LEVEL", LEVEL_LABEL);
    for (left, width, text) in [
        (0.9, 2.0, "Procure-to-Pay"),
        (3.1, 2.0, "Order-to-Cash"),
        (5.3, 2.0, "Make-to-Stock"),
        (7.5, 1.7, "Finance &\nReporting"),
    ] {
        slide.add_shape_box(inches(left, 1.8, width, 0.8), text, STRATEGIC, 11.0, false);
    }

    level_label(slide, 2.9, "BUSINESS CAPABILITY LEVEL", LEVEL_LABEL);
}

/// One row of five capability boxes; the last box is narrower.
fn capability_row(slide: &mut SlideBuilder<'_>, labels: [&str; 5], fills: [RgbColor; 5]) {
    let lefts = [0.9, 2.7, 4.5, 6.3, 8.1];
    for (i, (label, fill)) in labels.iter().zip(fills).enumerate() {
        let (width, size) = if i == 4 { (1.1, 9.0) } else { (1.6, 10.0) };
        slide.add_shape_box(inches(lefts[i], 3.5, width, 0.9), label, fill, size, true);
    }
}

/// One row of five 1.5" boxes starting at 0.9".
fn function_row(
    slide: &mut SlideBuilder<'_>,
    top: f64,
    height: f64,
    labels: [&str; 5],
    fills: [RgbColor; 5],
    bold: bool,
) {
    for (i, (label, fill)) in labels.iter().zip(fills).enumerate() {
        let left = 0.9 + 1.7 * i as f64;
        slide.add_shape_box(inches(left, top, 1.5, height), label, fill, 9.0, bold);
    }
}

/// Four annotation boxes down the right-hand side.
fn side_notes(slide: &mut SlideBuilder<'_>, notes: [(&str, [&str; 3]); 4]) {
    let placements = [(1.5, 1.2), (2.9, 1.2), (4.3, 1.2), (5.7, 1.1)];
    for ((top, height), (title, bullets)) in placements.into_iter().zip(notes) {
        slide.add_note_box(inches(10.0, top, 5.5, height), title, &bullets);
    }
}

fn title_slide(deck: &mut DeckBuilder) {
    deck.add_title_slide(
        "YTL Cement - SAP S/4HANA Transformation",
        "Business Case & Technical Architecture\nFully Editable Native PowerPoint Diagrams",
    );
}

fn capability_map_as_is(deck: &mut DeckBuilder) {
    const RED: RgbColor = RgbColor(255, 107, 107);
    const LIGHT_RED: RgbColor = RgbColor(255, 179, 179);
    const GREY: RgbColor = RgbColor(176, 176, 176);
    const LIGHT_GREY: RgbColor = RgbColor(208, 208, 208);

    let mut slide = deck.add_blank_slide();
    heading(
        &mut slide,
        "YTL Cement - Business Capability Map (Current State - AS-IS)",
    );
    capability_map_frame(&mut slide);
    capability_row(
        &mut slide,
        [
            "Invoice\nProcessing",
            "GL\nReconciliation",
            "Vendor\nManagement",
            "SoD\nCompliance",
            "e-Invoice\nCompliance",
        ],
        [RED, RED, RED, RED, GREY],
    );

    level_label(&mut slide, 4.7, "FUNCTIONAL LEVEL", LEVEL_LABEL);
    function_row(
        &mut slide,
        5.3,
        0.8,
        [
            "Create PO\nCreate PR",
            "Match Invoice\nto PO/GR",
            "Post GL\nEntries",
            "Detect SoD\nViolations",
            "Manual XML\nGeneration",
        ],
        [LIGHT_RED, LIGHT_RED, LIGHT_RED, LIGHT_RED, LIGHT_GREY],
        false,
    );

    side_notes(
        &mut slide,
        [
            (
                "🔴 RED = Manual, Error-Prone",
                [
                    "Current: 28K invoices/month",
                    "Issues: 1-2% undetected mismatches",
                    "Cost: $280K-560K annually",
                ],
            ),
            (
                "🔴 RED = Manual Process",
                [
                    "Current: 8-day close cycle",
                    "Issues: Manual variance investigation",
                    "Cost: $192K annually (labor)",
                ],
            ),
            (
                "🔴 RED = Excel-Based",
                [
                    "Current: 8,000 vendors",
                    "Issues: 23% duplicates",
                    "Cost: $200K-400K loss annually",
                ],
            ),
            (
                "🟡 YELLOW = Partial",
                [
                    "Current: Manual submission",
                    "Issues: Error-prone, not scalable",
                    "Deadline: Q2 2026 (LHDN MyInvois)",
                ],
            ),
        ],
    );

    slide.add_rich_shape_box(
        inches(10.0, 7.0, 5.5, 0.9),
        WHITE,
        "Legend:",
        10.0,
        &[
            "🔴 RED = Manual, Error-Prone, High Risk",
            "🟡 YELLOW = Partially Automated",
            "🟢 GREEN = Fully Automated, Optimized",
        ],
        8.0,
    );
}

fn capability_map_to_be(deck: &mut DeckBuilder) {
    const GREEN: RgbColor = RgbColor(102, 187, 106);
    const LIGHT_GREEN: RgbColor = RgbColor(168, 213, 186);
    const BLUE: RgbColor = RgbColor(66, 165, 245);

    let mut slide = deck.add_blank_slide();
    heading(
        &mut slide,
        "YTL Cement - Business Capability Map (Target State - TO-BE)",
    );
    capability_map_frame(&mut slide);
    capability_row(
        &mut slide,
        [
            "Invoice\nProcessing",
            "GL\nReconciliation",
            "Vendor\nManagement",
            "SoD\nCompliance",
            "e-Invoice\nCompliance",
        ],
        [GREEN; 5],
    );

    level_label(&mut slide, 4.7, "FUNCTIONAL LEVEL", LEVEL_LABEL);
    function_row(
        &mut slide,
        5.3,
        0.8,
        [
            "Automated PO\nGeneration",
            "Continuous\n3-Way Matching",
            "Real-Time GL\nPosting",
            "Real-Time SoD\nMonitoring",
            "Automated\nMyInvois",
        ],
        [LIGHT_GREEN; 5],
        false,
    );

    level_label(&mut slide, 6.4, "MVP MODULE LAYER", RgbColor(227, 242, 253));
    function_row(
        &mut slide,
        7.0,
        0.7,
        [
            "Invoice\nMatching",
            "GL Anomaly\nDetector",
            "Vendor Data\nQuality",
            "SoD\nAnalyzer",
            "e-Invoice\nModule",
        ],
        [BLUE; 5],
        true,
    );

    side_notes(
        &mut slide,
        [
            (
                "🟢 GREEN = Automated",
                [
                    "Target: 99.7% auto-match rate",
                    "Benefit: $280K-560K savings",
                    "Timeline: Continuous monitoring",
                ],
            ),
            (
                "🟢 GREEN = Real-Time",
                [
                    "Target: 3-4 day close",
                    "Benefit: $192K labor savings",
                    "Timeline: Real-time anomaly detection",
                ],
            ),
            (
                "🟢 GREEN = Data Quality",
                [
                    "Target: <5% duplicates",
                    "Benefit: $200K-400K recovery",
                    "Timeline: Automated de-duplication",
                ],
            ),
            (
                "🟢 GREEN = Automated",
                [
                    "Target: 100% LHDN compliance",
                    "Benefit: 0.5 FTE labor savings",
                    "Timeline: Automated submission",
                ],
            ),
        ],
    );
}

struct Gap {
    name: &'static str,
    top: f64,
    as_is: [&'static str; 4],
    solution: [&'static str; 4],
    to_be: [&'static str; 4],
}

const GAPS: [Gap; 4] = [
    Gap {
        name: "Invoice Processing",
        top: 1.2,
        as_is: ["Manual 3-Way Match", "28K invoices/month", "1-2% errors", "$280K-560K/yr cost"],
        solution: ["Invoice Matching MVP", "Continuous monitoring", "99.7% accuracy", "Pattern detection"],
        to_be: ["Automated Match", "ROI: <1 month", "Effort: 4-5 weeks", "Value: $280K-560K"],
    },
    Gap {
        name: "GL Reconciliation",
        top: 2.7,
        as_is: ["8-day close cycle", "Manual variance", "2-3 FTE per close", "$192K/yr cost"],
        solution: ["GL Anomaly Detector", "Real-time monitoring", "4-day close target", "Auto-detection"],
        to_be: ["Real-Time Recon", "ROI: 1-2 months", "Effort: 5-6 weeks", "Value: $192K/yr"],
    },
    Gap {
        name: "Vendor Data Quality",
        top: 4.2,
        as_is: ["8,000 vendors", "23% duplicates", "Manual management", "$200K-400K/yr"],
        solution: ["Vendor Quality MVP", "Auto de-duplication", "Quality scoring", "Compliance checks"],
        to_be: ["Automated Master", "ROI: 1-2 months", "Effort: 6-8 weeks", "Value: $200K-400K"],
    },
    Gap {
        name: "SoD Compliance",
        top: 5.7,
        as_is: ["Quarterly audits", "6-month lag", "Audit findings", "HIGH risk"],
        solution: ["SoD Analyzer MVP", "Real-time monitor", "25 key rules", "Auto-escalation"],
        to_be: ["Real-Time SoD", "ROI: 2-3 months", "Effort: 5-6 weeks", "Value: Risk mitigation"],
    },
];

fn gap_analysis(deck: &mut DeckBuilder) {
    let mut slide = deck.add_blank_slide();
    heading(&mut slide, "Gap Analysis: Current vs Target State");

    for gap in &GAPS {
        slide.add_shape_box(
            inches(0.5, gap.top, 15.0, 0.4),
            &format!("GAP: {}", gap.name),
            RgbColor(200, 200, 200),
            12.0,
            true,
        );

        let columns = [
            (0.5, 4.5, RgbColor(255, 153, 153), "AS-IS", &gap.as_is),
            (5.5, 4.5, RgbColor(255, 255, 153), "SOLUTION", &gap.solution),
            (10.5, 5.0, RgbColor(153, 255, 153), "TO-BE", &gap.to_be),
        ];
        for (left, width, fill, title, items) in columns {
            let lines: Vec<String> = items.iter().map(|item| format!("• {}", item)).collect();
            let lines: Vec<&str> = lines.iter().map(String::as_str).collect();
            slide.add_rich_shape_box(
                inches(left, gap.top + 0.5, width, 1.0),
                fill,
                title,
                10.0,
                &lines,
                8.0,
            );
        }
    }

    slide.add_note_box(
        inches(0.5, 7.2, 15.0, 1.2),
        "Total Gap Closure Summary:",
        &[
            "5 Major Gaps → 5 MVP Modules",
            "Total Investment: $160K-240K (MVP modules)",
            "Total Year 1 Benefit: $722K-1.2M",
            "Payback Period: 10-16 months",
            "Implementation: 18-week Phase 1",
        ],
    );
}

fn roi_summary(deck: &mut DeckBuilder) {
    let mut slide = deck.add_blank_slide();
    heading(&mut slide, "ROI & Annual Business Value");

    slide.add_shape_box(
        inches(0.5, 1.2, 7.0, 0.5),
        "INVESTMENT REQUIRED",
        RgbColor(255, 230, 230),
        14.0,
        true,
    );
    let investments = [
        ("S/4HANA License (1 year)", "$200K-250K"),
        ("Infrastructure/Hardware", "$150K-200K"),
        ("Implementation Services (1,000 MD)", "$200K-300K"),
        ("MVP Modules (5 modules)", "$160K-240K"),
        ("Change Management & Training", "$100K-150K"),
    ];
    let mut top = 1.8;
    for (item, cost) in investments {
        slide.add_shape_box(inches(0.5, top, 5.0, 0.5), item, RgbColor(255, 240, 240), 10.0, false);
        slide.add_shape_box(inches(5.7, top, 1.8, 0.5), cost, RgbColor(255, 200, 200), 10.0, true);
        top += 0.6;
    }
    slide.add_shape_box(
        inches(0.5, top, 7.0, 0.6),
        "TOTAL PHASE 1 INVESTMENT: $810K-1,140K",
        RgbColor(255, 100, 100),
        12.0,
        true,
    );

    slide.add_shape_box(
        inches(8.5, 1.2, 7.0, 0.5),
        "ANNUAL BENEFITS (Year 1+)",
        RgbColor(230, 255, 230),
        14.0,
        true,
    );
    let benefits = [
        ("Invoice Matching", "$280K-560K", "Month 4"),
        ("GL Anomaly Detector", "$192K", "Month 4"),
        ("Vendor Data Quality", "$200K-400K", "Month 6"),
        ("SoD Analyzer", "$40K", "Month 6"),
        ("e-Invoice Module", "Compliance", "Month 3"),
    ];
    let mut top = 1.8;
    for (item, value, timeline) in benefits {
        slide.add_shape_box(inches(8.5, top, 4.0, 0.5), item, RgbColor(240, 255, 240), 10.0, false);
        slide.add_shape_box(inches(12.7, top, 1.5, 0.5), value, RgbColor(200, 255, 200), 9.0, true);
        slide.add_shape_box(inches(14.3, top, 1.2, 0.5), timeline, RgbColor(220, 255, 220), 8.0, false);
        top += 0.6;
    }
    slide.add_shape_box(
        inches(8.5, top, 7.0, 0.6),
        "TOTAL YEAR 1 BENEFIT: $722K-1.2M",
        RgbColor(100, 255, 100),
        12.0,
        true,
    );

    slide.add_shape_box(
        inches(0.5, 5.5, 15.0, 0.5),
        "ROI CALCULATION",
        RgbColor(255, 255, 200),
        14.0,
        true,
    );
    let metrics = [
        ("Year 1 Net Benefit", "-$278K to +$200K", "(Investment phase)"),
        ("Payback Period", "10-16 months", "(Strong business case)"),
        ("Year 2 Net Benefit", "+$722K-1.2M", "(Recurring profit)"),
        ("Year 3 Net Benefit", "+$722K-1.2M", "(Recurring profit)"),
        ("3-Year Total Net", "+$1.166M-2.1M", "(Excellent ROI)"),
        ("IRR", "45-65%", "(Very attractive)"),
    ];
    let mut top = 6.1;
    for (metric, value, note) in metrics {
        slide.add_shape_box(inches(0.5, top, 4.5, 0.45), metric, RgbColor(255, 255, 230), 10.0, true);
        slide.add_shape_box(inches(5.2, top, 3.0, 0.45), value, RgbColor(255, 255, 180), 10.0, true);
        slide.add_shape_box(inches(8.4, top, 3.1, 0.45), note, RgbColor(255, 255, 230), 9.0, false);
        top += 0.5;
    }

    slide.add_rich_shape_box(
        inches(12.0, 6.1, 3.5, 2.3),
        RgbColor(200, 240, 255),
        "KEY TAKEAWAYS",
        11.0,
        &[
            "✓ Strong ROI: 10-16 months",
            "✓ Low risk investment",
            "✓ Recurring annual benefit",
            "✓ Compliance deadline met",
            "✓ Scalable for multi-plant",
        ],
        9.0,
    );
}

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

    let mut deck = DeckBuilder::with_config(config);
    title_slide(&mut deck);
    capability_map_as_is(&mut deck);
    capability_map_to_be(&mut deck);
    gap_analysis(&mut deck);
    roi_summary(&mut deck);

    deck.save(&args.output)?;

    println!(
        "✓ Native PowerPoint presentation created: {}",
        args.output.display()
    );
    println!("✓ Total slides: {}", deck.slide_count());
    println!("✓ All diagrams built with native PowerPoint shapes");
    println!("✓ Fully editable: colors, text, positions, sizes");
    Ok(())
}
