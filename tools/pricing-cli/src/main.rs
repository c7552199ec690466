//! Pricing CLI - operator dashboard for the Atelier pricing engine.
//!
//! Commands:
//! - `pricing regions` - Show regional price multipliers
//! - `pricing rates` - Show the shipping rate table
//! - `pricing margin` - Preview a margin breakdown
//! - `pricing compare` - Compare a base price across regions

use anyhow::{anyhow, Context, Result};
use atelier_pricing::{PricingConfig, PricingEngine, PricingRegion, ShippingZone};
use clap::{Args, Parser, Subcommand};
use console::style;

/// Inspect and simulate marketplace pricing
#[derive(Parser)]
#[command(name = "pricing")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Pricing config TOML file (defaults to the built-in reference tables)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show regional price multipliers
    Regions,

    /// Show the shipping rate table
    Rates,

    /// Preview the margin breakdown for a base price
    Margin(MarginArgs),

    /// Compare a base price across all regions
    Compare(CompareArgs),
}

#[derive(Args)]
struct MarginArgs {
    /// Base price in EUR
    #[arg(long)]
    base: f64,

    /// Pricing region (balkans, turkey, western_europe, international)
    #[arg(long, default_value = "western_europe")]
    region: String,

    /// Shipping zone (domestic, balkans, turkey, eu, international)
    #[arg(long, default_value = "eu")]
    zone: String,

    /// Parcel weight in kilograms
    #[arg(long, default_value_t = 1.0)]
    weight: f64,
}

#[derive(Args)]
struct CompareArgs {
    /// Base price in EUR
    #[arg(long)]
    base: f64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let engine = match cli.config.as_deref() {
        Some(path) => {
            let config = PricingConfig::load(path)
                .with_context(|| format!("Failed to load pricing config: {}", path))?;
            PricingEngine::new(config).context("Invalid pricing config")?
        }
        None => PricingEngine::reference(),
    };

    match cli.command {
        Commands::Regions => cmd_regions(&engine),
        Commands::Rates => cmd_rates(&engine),
        Commands::Margin(args) => cmd_margin(&engine, &args),
        Commands::Compare(args) => cmd_compare(&engine, &args),
    }
}

fn parse_region(s: &str) -> Result<PricingRegion> {
    PricingRegion::from_str(s).ok_or_else(|| {
        anyhow!(
            "Unknown region '{}' (expected balkans, turkey, western_europe or international)",
            s
        )
    })
}

fn parse_zone(s: &str) -> Result<ShippingZone> {
    ShippingZone::from_str(s).ok_or_else(|| {
        anyhow!(
            "Unknown zone '{}' (expected domestic, balkans, turkey, eu or international)",
            s
        )
    })
}

fn cmd_regions(engine: &PricingEngine) -> Result<()> {
    println!("{}", style("Regional price multipliers").bold());
    println!();
    for config in engine.regions() {
        let badge = if config.price_multiplier < 1.0 {
            format!("{:.0}% off", (1.0 - config.price_multiplier) * 100.0)
        } else if config.price_multiplier > 1.0 {
            format!("+{:.0}%", (config.price_multiplier - 1.0) * 100.0)
        } else {
            "base price".to_string()
        };
        println!(
            "  {:<16} x{:<5} {}",
            style(&config.label).bold(),
            config.price_multiplier,
            style(badge).cyan()
        );
        println!("    {}", style(&config.description).dim());
        let example = engine.regional_price(45.0, config.region)?;
        println!("    {}", style(format!("EUR 45 -> EUR {:.2}", example)).dim());
    }
    Ok(())
}

fn cmd_rates(engine: &PricingEngine) -> Result<()> {
    println!("{}", style("Shipping rate table").bold());
    println!();
    println!(
        "  {:<34} {:>9} {:>12} {:>11}  {}",
        "Zone", "Base", "Per extra kg", "Free above", "Est. delivery"
    );
    for rate in engine.shipping_rates() {
        let free_above = match rate.free_above {
            Some(threshold) => format!("EUR {:.0}", threshold),
            None => "Never".to_string(),
        };
        println!(
            "  {:<34} {:>9} {:>12} {:>11}  {}",
            rate.label,
            format!("EUR {:.2}", rate.base_cost),
            format!("EUR {:.2}", rate.per_kg_cost),
            free_above,
            style(&rate.estimated_days).dim()
        );
    }
    Ok(())
}

fn cmd_margin(engine: &PricingEngine, args: &MarginArgs) -> Result<()> {
    let region = parse_region(&args.region)?;
    let zone = parse_zone(&args.zone)?;

    let breakdown = engine.margin(args.base, region, zone, args.weight)?;
    let shipping = engine.shipping_cost(breakdown.selling_price, zone, args.weight)?;
    let rate = engine.shipping_rate(zone);

    println!(
        "{}",
        style(format!(
            "Margin preview: EUR {:.2} base, {} / {}",
            args.base, region, zone
        ))
        .bold()
    );
    println!();
    println!("  Selling price    EUR {:>8.2}", breakdown.selling_price);
    println!(
        "  Platform fee     EUR {:>8.2}  ({:.1}%)",
        breakdown.platform_fee, breakdown.margin_pct
    );
    println!(
        "  Artisan payout   EUR {}",
        style(format!("{:>8.2}", breakdown.artisan_payout)).green()
    );
    if shipping.is_free {
        println!("  Shipping         {} (order clears the threshold)", style("FREE").green());
    } else {
        println!("  Shipping         EUR {:>8.2}", shipping.cost);
    }
    println!("  Est. delivery    {}", style(&rate.estimated_days).dim());
    println!();
    println!(
        "  Customer total   EUR {}",
        style(format!("{:>8.2}", breakdown.selling_price + shipping.cost)).bold()
    );
    Ok(())
}

fn cmd_compare(engine: &PricingEngine, args: &CompareArgs) -> Result<()> {
    println!(
        "{}",
        style(format!("EUR {:.2} base price across regions", args.base)).bold()
    );
    println!();
    for row in engine.region_comparison(args.base)? {
        let label = &engine.region_config(row.region).label;
        println!(
            "  {:<16} x{:<5} EUR {}",
            label,
            row.multiplier,
            style(format!("{:>8.2}", row.price)).bold()
        );
    }
    Ok(())
}
