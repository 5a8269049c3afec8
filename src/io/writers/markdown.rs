use crate::estimation::FpaCalculations;
use crate::io::output::{EstimateReport, OutputWriter};
use std::io::Write;

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &EstimateReport) -> anyhow::Result<()> {
        let calc = &report.calculations;
        self.write_header(report)?;
        self.write_summary(calc)?;
        self.write_component_breakdown(calc)?;
        self.write_complexity_breakdown(calc)?;
        self.write_phases_and_costs(calc)?;
        self.write_productivity(calc)?;
        self.write_risk(calc)?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, report: &EstimateReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# Function Point Estimate: {}", report.title())?;
        writeln!(self.writer)?;
        if let Some(org) = &report.organization {
            writeln!(self.writer, "Organization: {}", org)?;
        }
        writeln!(
            self.writer,
            "Generated: {}",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, calc: &FpaCalculations) -> anyhow::Result<()> {
        writeln!(self.writer, "## Summary")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;

        let FpaCalculations {
            pfna,
            ni,
            fa,
            pfa,
            effort_hours,
            duration_days,
            duration_weeks,
            duration_months,
            total_cost,
            cost_per_function_point,
            cost_per_person,
            hours_per_person,
            ..
        } = calc;
        let rows = [
            ("Unadjusted function points (PFNA)", format!("{pfna:.2}")),
            ("Degree of influence (NI)", format!("{ni:.0}")),
            ("Adjustment factor (FA)", format!("{fa:.2}")),
            ("Adjusted function points (PFA)", format!("{pfa:.2}")),
            ("Effort", format!("{effort_hours:.1} h")),
            (
                "Duration",
                format!(
                    "{:.1} days / {:.1} weeks / {:.1} months",
                    duration_days, duration_weeks, duration_months
                ),
            ),
            ("Total cost", format!("R$ {total_cost:.2}")),
            (
                "Cost per function point",
                format!("R$ {cost_per_function_point:.2}"),
            ),
            ("Cost per person", format!("R$ {cost_per_person:.2}")),
            ("Hours per person", format!("{hours_per_person:.1} h")),
        ];
        for (metric, value) in rows {
            writeln!(self.writer, "| {} | {} |", metric, value)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_component_breakdown(&mut self, calc: &FpaCalculations) -> anyhow::Result<()> {
        let breakdown = &calc.component_breakdown;
        writeln!(self.writer, "## Components by Type")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Type | Count | Points | Share |")?;
        writeln!(self.writer, "|------|-------|--------|-------|")?;
        for (component_type, entry) in breakdown.entries() {
            writeln!(
                self.writer,
                "| {} ({}) | {} | {:.2} | {:.1}% |",
                component_type,
                component_type.description(),
                entry.count,
                entry.points,
                entry.percentage
            )?;
        }
        writeln!(
            self.writer,
            "| **Total** | {} | {:.2} | |",
            breakdown.total.count, breakdown.total.points
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_complexity_breakdown(&mut self, calc: &FpaCalculations) -> anyhow::Result<()> {
        writeln!(self.writer, "## Components by Complexity")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Complexity | Count | Points | Share |")?;
        writeln!(self.writer, "|------------|-------|--------|-------|")?;
        for (complexity, entry) in calc.complexity_breakdown.entries() {
            writeln!(
                self.writer,
                "| {} | {} | {:.2} | {:.1}% |",
                complexity, entry.count, entry.points, entry.percentage
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_phases_and_costs(&mut self, calc: &FpaCalculations) -> anyhow::Result<()> {
        writeln!(self.writer, "## Effort by Phase")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Phase | Hours | Share |")?;
        writeln!(self.writer, "|-------|-------|-------|")?;
        for (phase, entry) in calc.phase_breakdown.entries() {
            writeln!(
                self.writer,
                "| {} | {:.1} | {:.0}% |",
                phase, entry.hours, entry.percentage
            )?;
        }
        writeln!(self.writer)?;

        let costs = &calc.cost_breakdown;
        writeln!(self.writer, "## Cost Breakdown")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Category | Cost |")?;
        writeln!(self.writer, "|----------|------|")?;
        for (category, value) in [
            ("Development", costs.development),
            ("Management", costs.management),
            ("Infrastructure", costs.infrastructure),
            ("Contingency", costs.contingency),
            ("**Total**", costs.total),
        ] {
            writeln!(self.writer, "| {} | R$ {:.2} |", category, value)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_productivity(&mut self, calc: &FpaCalculations) -> anyhow::Result<()> {
        let metrics = &calc.productivity_metrics;
        let comparison = &metrics.industry_comparison;
        writeln!(self.writer, "## Productivity")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "- Hours per function point: {:.2} (benchmark {:.0})",
            metrics.hours_per_function_point, comparison.benchmark_hours_per_fp
        )?;
        writeln!(
            self.writer,
            "- Performance index: {:.1} ({})",
            comparison.performance_index,
            comparison.rating.as_str()
        )?;
        writeln!(
            self.writer,
            "- Function points per day: {:.2}",
            metrics.function_points_per_day
        )?;
        writeln!(
            self.writer,
            "- Function points per person-month: {:.2}",
            metrics.function_points_per_person_month
        )?;
        writeln!(
            self.writer,
            "- Team efficiency: {:.2}",
            metrics.team_efficiency
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_risk(&mut self, calc: &FpaCalculations) -> anyhow::Result<()> {
        let risk = &calc.risk_analysis;
        writeln!(self.writer, "## Risk Analysis")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "Overall risk: **{}**", risk.overall_risk)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Factor | Risk | Reason |")?;
        writeln!(self.writer, "|--------|------|--------|")?;
        for (name, factor) in risk.factors.in_order() {
            writeln!(
                self.writer,
                "| {} | {} | {} |",
                name, factor.risk, factor.reason
            )?;
        }
        writeln!(self.writer)?;

        if !risk.recommendations.is_empty() {
            writeln!(self.writer, "### Recommendations")?;
            writeln!(self.writer)?;
            for recommendation in risk.recommendations.iter() {
                writeln!(self.writer, "- {}", recommendation)?;
            }
            writeln!(self.writer)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::output::test_support::sample_report;

    #[test]
    fn test_markdown_sections() {
        let mut buffer = Vec::new();
        MarkdownWriter::new(&mut buffer)
            .write_report(&sample_report())
            .unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.starts_with("# Function Point Estimate: Payroll"));
        assert!(text.contains("Organization: Acme"));
        assert!(text.contains("Generated: 2026-03-01 12:00:00 UTC"));
        assert!(text.contains("| Adjusted function points (PFA) | 10.00 |"));
        assert!(text.contains("| teamSize | HIGH |"));
        assert!(text.contains("### Recommendations"));
    }
}
