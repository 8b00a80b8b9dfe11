use mktsync_sync::{CampaignOutcome, CampaignReport};

pub(crate) fn print_outcome(outcome: &CampaignOutcome) {
    match outcome {
        CampaignOutcome::Succeeded(report) => println!("{}", summarize(report)),
        CampaignOutcome::Failed {
            campaign,
            error,
            attempts,
        } => eprintln!("error: campaign {campaign} failed after {attempts} attempt(s): {error}"),
    }
}

pub(crate) fn summarize(report: &CampaignReport) -> String {
    let verb = if report.dry_run { "would push" } else { "pushed" };
    let mut parts = vec![format!("{} offers listed", report.known_offers)];

    if let Some(stocks) = &report.stocks {
        parts.push(format!(
            "{verb} {} stock records ({} in stock)",
            stocks.all.len(),
            stocks.non_zero.len()
        ));
    }
    if let Some(prices) = &report.prices {
        parts.push(format!("{verb} {} prices", prices.len()));
    }

    let prefix = if report.dry_run { "dry-run: " } else { "" };
    format!("{prefix}{}: {}", report.campaign, parts.join(", "))
}
