//! Colored terminal rendering for the two report views.

use colored::Colorize;

use mealpoints_domain::{BudgetReport, SliceLabel, TrendReport};

fn money(value: f64) -> String {
    format!("${value:.2}")
}

pub fn trend(report: &TrendReport) {
    println!("{}", "Spending Analytics".red().bold());
    println!();
    println!("{:<12} {:>10} {:>13}", "date".dimmed(), "dining", "convenience");
    for point in &report.points {
        let marker = if point.date == report.today {
            "  <- today".cyan().to_string()
        } else {
            String::new()
        };
        println!(
            "{:<12} {:>10} {:>13}{}",
            point.date.format("%Y-%m-%d").to_string(),
            money(point.dining),
            money(point.convenience),
            marker
        );
    }
    println!();
    println!(
        "Spent:     dining {}, convenience {}",
        money(report.totals.dining).bold(),
        money(report.totals.convenience).bold()
    );
    println!(
        "Remaining: dining {}, convenience {}",
        money(report.remaining.dining).green(),
        money(report.remaining.convenience).green()
    );
}

pub fn budget(report: &BudgetReport) {
    println!("{}", "Budget".red().bold());
    println!(
        "{} - {}",
        report.week_start.format("%b %-d"),
        report.week_end.format("%b %-d")
    );
    println!();

    for day in &report.daily_breakdown {
        println!(
            "{:<10} {:<7} {:>6.0}",
            day.date.format("%A").to_string(),
            day.date.format("%b %-d").to_string().dimmed(),
            day.spent
        );
    }
    println!(
        "Weekly dining total: {}  |  Swipes available: {}",
        money(report.weekly_total).bold(),
        report.swipes_remaining.to_string().red()
    );
    if let Some(limit) = &report.dining_budget {
        println!(
            "Weekly dining limit: {:.0} - spent this week: {:.0}",
            limit.total_limit, report.weekly_total
        );
    }

    println!();
    println!("{}", "Convenience".bold());
    match report.proportion.as_slice() {
        [slice] if slice.label == SliceLabel::Placeholder => {
            println!("{:.0} pts remaining (no activity yet)", report.convenience_remaining);
        }
        slices => {
            println!("{:.0} pts remaining", report.convenience_remaining);
            for slice in slices {
                println!("  {:<10} {:>8.2}", slice.label.to_string().dimmed(), slice.value);
            }
        }
    }
    if let Some(limit) = &report.convenience_budget {
        println!(
            "Weekly convenience limit: {:.0} - spent this week: {:.0}",
            limit.total_limit, report.convenience_spent
        );
    }
    for row in &report.category_totals {
        println!("{:<12} -{:.0}", row.name.bold(), row.spent);
    }
}
