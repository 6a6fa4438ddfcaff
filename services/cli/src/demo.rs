use crate::infra::{parse_category, parse_site_type, site_service, InMemorySiteRepository};
use chrono::Utc;
use clap::Args;
use serde::Serialize;
use site_scout::config::ScoringConfig;
use site_scout::error::AppError;
use site_scout::evaluation::{
    FinancialRecord, ImportSummary, MetricCatalog, MetricCategory, NewSite, RatingsImporter,
    Site, SiteEvaluation, SiteEvaluationService, SiteType,
};
use std::path::PathBuf;
use std::sync::Arc;

const OFFICE_SAMPLE: &str = include_str!("../data/office_ratings.csv");
const SCHOOL_SAMPLE: &str = include_str!("../data/school_ratings.csv");

#[derive(Args, Debug)]
pub(crate) struct CatalogArgs {
    /// Site type to list metrics for (office, hospital, school, residential)
    #[arg(long, value_parser = parse_site_type)]
    pub(crate) site_type: SiteType,
    /// Only show metrics in this category (e.g. foot_traffic, competition)
    #[arg(long, value_parser = parse_category)]
    pub(crate) category: Option<MetricCategory>,
}

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// Display name of the candidate site
    #[arg(long)]
    pub(crate) name: String,
    /// Street address of the candidate site
    #[arg(long, default_value = "")]
    pub(crate) address: String,
    /// Site type (office, hospital, school, residential)
    #[arg(long, value_parser = parse_site_type)]
    pub(crate) site_type: SiteType,
    /// Free-form comment stored with the site
    #[arg(long, default_value = "")]
    pub(crate) comment: String,
    /// Ratings sheet with `Metric,Rating,Notes` columns
    #[arg(long)]
    pub(crate) ratings: Option<PathBuf>,
    /// Projected annual revenue
    #[arg(long)]
    pub(crate) revenue: Option<f64>,
    /// Projected annual cost
    #[arg(long)]
    pub(crate) cost: Option<f64>,
    /// Profit margin percentage
    #[arg(long)]
    pub(crate) margin: Option<f64>,
    /// Payback period in months
    #[arg(long)]
    pub(crate) payback: Option<f64>,
    /// Return on investment percentage
    #[arg(long)]
    pub(crate) roi: Option<f64>,
    /// Print the evaluation as JSON instead of a text report
    #[arg(long)]
    pub(crate) json: bool,
}

impl EvaluateArgs {
    fn financials(&self) -> Option<FinancialRecord> {
        let figures = [self.revenue, self.cost, self.margin, self.payback, self.roi];
        if figures.iter().all(Option::is_none) {
            return None;
        }

        Some(FinancialRecord {
            revenue_projection: self.revenue.unwrap_or_default(),
            cost_projection: self.cost.unwrap_or_default(),
            profit_margin: self.margin.unwrap_or_default(),
            payback_period_months: self.payback.unwrap_or_default(),
            roi_percentage: self.roi.unwrap_or_default(),
        })
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print each evaluation as JSON instead of a text report
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Serialize)]
struct EvaluationReport<'a> {
    name: &'a str,
    address: &'a str,
    import: Option<&'a ImportSummary>,
    evaluation: &'a SiteEvaluation,
}

pub(crate) fn run_catalog(args: CatalogArgs, catalog: &MetricCatalog) -> Result<(), AppError> {
    let CatalogArgs {
        site_type,
        category,
    } = args;

    println!("Metric catalog for {} sites", site_type);
    let categories = match category {
        Some(category) => vec![category],
        None => catalog.categories_for(site_type),
    };

    for category in categories {
        let definitions = catalog.metrics_for_category(site_type, category);
        if definitions.is_empty() {
            println!("\n{}: no metrics", category);
            continue;
        }

        println!("\n{}", category);
        for definition in definitions {
            let required = if definition.is_required { " [required]" } else { "" };
            println!(
                "- {} ({}) weight {:.0}%{}",
                definition.title,
                definition.key,
                definition.weight * 100.0,
                required
            );
            let labels: Vec<String> = definition
                .rating_labels
                .iter()
                .map(|(rating, label)| format!("{rating} {label}"))
                .collect();
            if !labels.is_empty() {
                println!("    {}", labels.join(" | "));
            }
        }
    }

    println!(
        "\nTotal weight: {:.2} across {} metrics",
        catalog.total_weight_for(site_type),
        catalog.metrics_for(site_type).len()
    );
    Ok(())
}

pub(crate) fn run_evaluate(
    args: EvaluateArgs,
    catalog: Arc<MetricCatalog>,
    config: ScoringConfig,
) -> Result<(), AppError> {
    let service = site_service(Arc::clone(&catalog), config);
    let site = service.create_site(NewSite {
        name: args.name.clone(),
        address: args.address.clone(),
        site_type: args.site_type,
        comment: args.comment.clone(),
    })?;

    let import = match &args.ratings {
        Some(path) => {
            let entries = RatingsImporter::from_path(path)?;
            Some(RatingsImporter::apply(&entries, &service, &site.id)?)
        }
        None => None,
    };

    if let Some(financials) = args.financials() {
        service.update_financials(&site.id, financials)?;
    }

    report_site(&service, &site, &catalog, import.as_ref(), args.json)
}

pub(crate) fn run_demo(
    args: DemoArgs,
    catalog: Arc<MetricCatalog>,
    config: ScoringConfig,
) -> Result<(), AppError> {
    let service = site_service(Arc::clone(&catalog), config);

    if !args.json {
        println!("Site scouting demo ({} rule)", config.combination);
        println!("Evaluated {}", Utc::now().format("%Y-%m-%d %H:%M UTC"));
    }

    let office = service.create_site(NewSite {
        name: "Riverside Commons".to_string(),
        address: "400 River Rd".to_string(),
        site_type: SiteType::Office,
        comment: "Lobby next to the elevator bank".to_string(),
    })?;
    let entries = RatingsImporter::from_reader(OFFICE_SAMPLE.as_bytes())?;
    let office_import = RatingsImporter::apply(&entries, &service, &office.id)?;
    service.update_financials(
        &office.id,
        FinancialRecord {
            revenue_projection: 14_000.0,
            cost_projection: 4_000.0,
            profit_margin: 35.0,
            payback_period_months: 11.0,
            roi_percentage: 60.0,
        },
    )?;
    report_site(&service, &office, &catalog, Some(&office_import), args.json)?;

    let school = service.create_site(NewSite {
        name: "Lincoln High".to_string(),
        address: "75 College Ave".to_string(),
        site_type: SiteType::School,
        comment: "Cafeteria annex, first walk-through".to_string(),
    })?;
    let entries = RatingsImporter::from_reader(SCHOOL_SAMPLE.as_bytes())?;
    let school_import = RatingsImporter::apply(&entries, &service, &school.id)?;
    report_site(&service, &school, &catalog, Some(&school_import), args.json)
}

fn report_site(
    service: &SiteEvaluationService<InMemorySiteRepository>,
    site: &Site,
    catalog: &MetricCatalog,
    import: Option<&ImportSummary>,
    json: bool,
) -> Result<(), AppError> {
    let evaluation = service.evaluate(&site.id)?;
    let site = service.get(&site.id)?;

    if json {
        let report = EvaluationReport {
            name: &site.name,
            address: &site.address,
            import,
            evaluation: &evaluation,
        };
        let rendered = serde_json::to_string_pretty(&report).map_err(std::io::Error::from)?;
        println!("{rendered}");
    } else {
        render_evaluation(&site, &evaluation, catalog, import);
    }
    Ok(())
}

fn render_evaluation(
    site: &Site,
    evaluation: &SiteEvaluation,
    catalog: &MetricCatalog,
    import: Option<&ImportSummary>,
) {
    println!("\n{} ({} site, {})", site.name, site.site_type(), site.id);
    if !site.address.is_empty() {
        println!("Address: {}", site.address);
    }
    if !site.comment.is_empty() {
        println!("Comment: {}", site.comment);
    }

    if let Some(summary) = import {
        println!(
            "Ratings sheet: {} catalog metrics, {} scorecard fields applied",
            summary.catalog_metrics.len(),
            summary.scorecard_fields.len()
        );
        for skipped in &summary.skipped {
            println!("  skipped {}: {}", skipped.key, skipped.reason);
        }
    }

    let breakdown = &evaluation.breakdown;
    println!("\nScores");
    println!("- General (weighted catalog): {}", breakdown.general);
    println!("- {} scorecard: {}", evaluation.site_type, breakdown.type_specific);
    println!("- Financial: {}", breakdown.financial);
    println!("- Overall ({}): {}", breakdown.rule, breakdown.overall);
    println!("Decision: {}", evaluation.decision.summary());
    println!(
        "Completion: catalog {:.0}% | scorecard {:.0}%",
        evaluation.general_completion * 100.0,
        evaluation.type_specific_completion * 100.0
    );

    if !evaluation.category_scores.is_empty() {
        println!("\nCategory averages");
        for (category, score) in &evaluation.category_scores {
            println!("- {}: {:.2}", category, score);
        }
    }

    let rated: Vec<_> = catalog
        .metrics_for(evaluation.site_type)
        .into_iter()
        .filter_map(|definition| {
            site.metrics()
                .instance(&definition.key)
                .filter(|instance| instance.is_rated())
                .map(|instance| (definition, instance))
        })
        .collect();
    if !rated.is_empty() {
        println!("\nRated metrics");
        for (definition, instance) in rated {
            let label = definition.label_for(instance.rating).unwrap_or("unlabelled");
            if instance.notes.is_empty() {
                println!("- {}: {} ({})", definition.title, instance.rating, label);
            } else {
                println!(
                    "- {}: {} ({}) {}",
                    definition.title, instance.rating, label, instance.notes
                );
            }
        }
    }

    let fields: Vec<_> = evaluation
        .scorecard
        .iter()
        .filter(|entry| entry.rating > 0)
        .collect();
    if !fields.is_empty() {
        println!("\nScorecard");
        for entry in fields {
            println!("- {}: {}", entry.title, entry.rating);
        }
    }

    if evaluation.warnings.is_empty() {
        println!("\nWarnings: none");
    } else {
        println!("\nWarnings");
        for warning in &evaluation.warnings {
            println!("- {}", warning);
        }
    }
}
