use crate::estimation::FpaCalculations;
use crate::formatting::{ColoredFormatter, FormattingConfig};
use crate::io::output::{EstimateReport, OutputWriter};
use comfy_table::presets::{ASCII_FULL, UTF8_FULL};
use comfy_table::Table;
use std::io::Write;

const RULE: &str = "═══════════════════════════════════════════";

pub struct TerminalWriter<W: Write> {
    writer: W,
    formatter: ColoredFormatter,
    formatting: FormattingConfig,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, formatting: FormattingConfig) -> Self {
        Self {
            writer,
            formatter: ColoredFormatter::new(formatting),
            formatting,
        }
    }

    fn table(&self, header: Vec<&str>) -> Table {
        let mut table = Table::new();
        if self.formatting.color.should_use_color() {
            table.load_preset(UTF8_FULL);
        } else {
            table.load_preset(ASCII_FULL);
        }
        table.set_header(header);
        table
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &EstimateReport) -> anyhow::Result<()> {
        let calc = &report.calculations;
        self.print_header(report)?;
        self.print_summary(calc)?;
        self.print_breakdowns(calc)?;
        self.print_productivity(calc)?;
        self.print_risk(calc)?;
        Ok(())
    }
}

impl<W: Write> TerminalWriter<W> {
    fn print_header(&mut self, report: &EstimateReport) -> anyhow::Result<()> {
        let f = self.formatter;
        writeln!(self.writer, "{}", f.header(RULE))?;
        writeln!(
            self.writer,
            "{}",
            f.header(&format!("  FUNCTION POINT ESTIMATE: {}", report.title()))
        )?;
        writeln!(self.writer, "{}", f.header(RULE))?;
        if let Some(org) = &report.organization {
            writeln!(self.writer, "Organization: {}", org)?;
        }
        writeln!(
            self.writer,
            "{}",
            f.dim(&format!(
                "Generated: {}",
                report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
            ))
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_summary(&mut self, calc: &FpaCalculations) -> anyhow::Result<()> {
        let f = self.formatter;
        writeln!(self.writer, "{}", f.bold("SIZE"))?;
        writeln!(
            self.writer,
            "  PFNA {:.2}  x  FA {:.2} (NI {:.0})  =  PFA {:.2}",
            calc.pfna, calc.fa, calc.ni, calc.pfa
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", f.bold("EFFORT & SCHEDULE"))?;
        writeln!(self.writer, "  Effort:   {:.1} hours", calc.effort_hours)?;
        writeln!(
            self.writer,
            "  Duration: {:.1} days ({:.1} weeks, {:.1} months)",
            calc.duration_days, calc.duration_weeks, calc.duration_months
        )?;
        writeln!(
            self.writer,
            "  Per person: {:.1} hours, R$ {:.2}",
            calc.hours_per_person, calc.cost_per_person
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", f.bold("COST"))?;
        writeln!(self.writer, "  Total:    R$ {:.2}", calc.total_cost)?;
        writeln!(
            self.writer,
            "  Per FP:   R$ {:.2}",
            calc.cost_per_function_point
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_breakdowns(&mut self, calc: &FpaCalculations) -> anyhow::Result<()> {
        let mut by_type = self.table(vec!["Type", "Count", "Points", "Share"]);
        for (component_type, entry) in calc.component_breakdown.entries() {
            by_type.add_row(vec![
                component_type.to_string(),
                entry.count.to_string(),
                format!("{:.2}", entry.points),
                format!("{:.1}%", entry.percentage),
            ]);
        }
        by_type.add_row(vec![
            "Total".to_string(),
            calc.component_breakdown.total.count.to_string(),
            format!("{:.2}", calc.component_breakdown.total.points),
            String::new(),
        ]);

        let mut by_complexity = self.table(vec!["Complexity", "Count", "Points", "Share"]);
        for (complexity, entry) in calc.complexity_breakdown.entries() {
            by_complexity.add_row(vec![
                complexity.to_string(),
                entry.count.to_string(),
                format!("{:.2}", entry.points),
                format!("{:.1}%", entry.percentage),
            ]);
        }

        let mut phases = self.table(vec!["Phase", "Hours", "Share"]);
        for (phase, entry) in calc.phase_breakdown.entries() {
            phases.add_row(vec![
                phase.to_string(),
                format!("{:.1}", entry.hours),
                format!("{:.0}%", entry.percentage),
            ]);
        }

        let costs = &calc.cost_breakdown;
        let mut cost_table = self.table(vec!["Category", "Cost"]);
        for (category, value) in [
            ("development", costs.development),
            ("management", costs.management),
            ("infrastructure", costs.infrastructure),
            ("contingency", costs.contingency),
            ("total", costs.total),
        ] {
            cost_table.add_row(vec![category.to_string(), format!("R$ {:.2}", value)]);
        }

        let f = self.formatter;
        for (title, table) in [
            ("COMPONENTS BY TYPE", by_type),
            ("COMPONENTS BY COMPLEXITY", by_complexity),
            ("EFFORT BY PHASE", phases),
            ("COST BREAKDOWN", cost_table),
        ] {
            writeln!(self.writer, "{}", f.bold(title))?;
            writeln!(self.writer, "{table}")?;
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn print_productivity(&mut self, calc: &FpaCalculations) -> anyhow::Result<()> {
        let f = self.formatter;
        let metrics = &calc.productivity_metrics;
        let comparison = &metrics.industry_comparison;
        writeln!(self.writer, "{}", f.bold("PRODUCTIVITY"))?;
        writeln!(
            self.writer,
            "  {:.2} h/FP vs benchmark {:.0} h/FP, index {:.1} ({})",
            metrics.hours_per_function_point,
            comparison.benchmark_hours_per_fp,
            comparison.performance_index,
            comparison.rating.as_str()
        )?;
        writeln!(
            self.writer,
            "  {:.2} FP/day, {:.2} FP/person-month, team efficiency {:.2}",
            metrics.function_points_per_day,
            metrics.function_points_per_person_month,
            metrics.team_efficiency
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_risk(&mut self, calc: &FpaCalculations) -> anyhow::Result<()> {
        let f = self.formatter;
        let risk = &calc.risk_analysis;
        writeln!(
            self.writer,
            "{} {}",
            f.bold("OVERALL RISK:"),
            f.risk(risk.overall_risk)
        )?;
        for (name, factor) in risk.factors.in_order() {
            writeln!(
                self.writer,
                "  {:<16} {:<8} {}",
                name,
                f.risk(factor.risk),
                factor.reason
            )?;
        }
        if !risk.recommendations.is_empty() {
            writeln!(self.writer)?;
            writeln!(self.writer, "{}", f.bold("RECOMMENDATIONS"))?;
            for (i, recommendation) in risk.recommendations.iter().enumerate() {
                writeln!(self.writer, "  {}. {}", i + 1, recommendation)?;
            }
        }
        Ok(())
    }
}
