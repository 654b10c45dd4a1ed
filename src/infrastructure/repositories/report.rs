//! Text report writer
//!
//! Reports land in one subdirectory per day:
//! - `<closings>/<YYYY-MM-DD>/cierre_caja_<HH-MM-SS>.txt`
//! - `<saved_orders>/<YYYY-MM-DD>/listado_ordenes_<HH-MM-SS>.txt`

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use tracing::info;

use crate::config::RestaurantConfig;
use crate::domain::entities::{ClosingReport, Order};
use crate::domain::ports::{ReportWriter, StoreError, StoreResult};
use crate::domain::services::summarize;
use crate::infrastructure::fs::{atomic_write, ensure_dir};
use crate::text::{pad_end, pad_start, rule};

const REPORT_WIDTH: usize = 80;

/// `ReportWriter` producing plain-text reports
#[derive(Debug, Clone)]
pub struct TextReportWriter {
    saved_orders: PathBuf,
    closings: PathBuf,
    restaurant: RestaurantConfig,
}

impl TextReportWriter {
    pub fn new(
        saved_orders: impl Into<PathBuf>,
        closings: impl Into<PathBuf>,
        restaurant: RestaurantConfig,
    ) -> Self {
        Self {
            saved_orders: saved_orders.into(),
            closings: closings.into(),
            restaurant,
        }
    }

    fn write_dated(
        &self,
        base: &Path,
        prefix: &str,
        now: DateTime<Local>,
        content: &str,
    ) -> StoreResult<PathBuf> {
        let day_dir = base.join(now.format("%Y-%m-%d").to_string());
        ensure_dir(&day_dir).map_err(|e| StoreError::io(&day_dir, e))?;

        let path = day_dir.join(format!("{}_{}.txt", prefix, now.format("%H-%M-%S")));
        atomic_write(&path, content).map_err(|e| StoreError::io(&path, e))?;
        info!(path = %path.display(), "report written");
        Ok(path)
    }

    fn banner(&self) -> String {
        if self.restaurant.tagline.is_empty() {
            format!("{}\n\n", self.restaurant.name)
        } else {
            format!("{} - {}\n\n", self.restaurant.name, self.restaurant.tagline)
        }
    }

    /// Full text of a closing report
    pub fn render_closing(&self, report: &ClosingReport) -> String {
        let mut out = String::new();
        push_heading(&mut out, "CIERRE DE CAJA DEL DÍA");
        out.push_str(&self.banner());
        out.push_str(&format!(
            "Fecha de Cierre: {}\n",
            report.closed_at.format("%d/%m/%Y %H:%M:%S")
        ));

        push_section(&mut out, "RESUMEN ESTADÍSTICO:");
        out.push_str(&format!("Total de órdenes:        {}\n", report.order_count()));
        out.push_str(&format!("Total de ingresos:       {}\n", report.total_revenue()));
        out.push_str(&format!("Promedio por orden:      {}\n", report.average_order()));
        out.push_str(&format!("Total de platillos:      {}\n", report.items_sold));
        if let Some(best) = &report.best_category {
            out.push_str(&format!(
                "Categoría más vendida:   {} ({} platillos)\n",
                best.category, best.quantity
            ));
        }

        push_section(&mut out, "DETALLES POR ORDEN:");
        for order in &report.orders {
            out.push_str(&format!(
                "Orden #{} - {} {}\n",
                pad_end(&order.number().to_string(), 3),
                pad_end(order.customer(), 20),
                pad_start(&order.total().to_string(), 13),
            ));
        }

        out.push('\n');
        out.push_str(&rule('=', REPORT_WIDTH));
        out.push('\n');
        out.push_str(&format!(
            "{} {}\n",
            pad_end("TOTAL FINAL:", 40),
            pad_start(&report.total_revenue().to_string(), 13)
        ));
        out.push_str(&rule('=', REPORT_WIDTH));
        out.push('\n');
        out
    }

    /// Full text of an order listing, with every line item
    pub fn render_listing(&self, orders: &[Order], now: DateTime<Local>) -> String {
        let mut out = String::new();
        push_heading(
            &mut out,
            &format!(
                "LISTADO COMPLETO DE ÓRDENES - {}",
                now.format("%d/%m/%Y %H:%M:%S")
            ),
        );
        out.push_str(&self.banner());

        for (idx, order) in orders.iter().enumerate() {
            out.push_str(&format!("--- ORDEN #{} ---\n", idx + 1));
            out.push_str(&format!("Número de Orden: {}\n", order.number()));
            out.push_str(&format!("Cliente: {}\n", order.customer()));
            out.push_str(&format!(
                "Fecha: {}\n",
                order.created_at().format("%d/%m/%Y %H:%M:%S")
            ));
            out.push_str(&rule('-', REPORT_WIDTH));
            out.push_str("\nDETALLE:\n");
            for line in order.lines() {
                out.push_str(&format!(
                    "  {}x {} {}\n",
                    line.quantity(),
                    pad_end(line.dish().name(), 40),
                    pad_start(&line.subtotal().to_string(), 13),
                ));
            }
            out.push_str(&rule('-', REPORT_WIDTH));
            out.push('\n');
            out.push_str(&format!(
                "{} {}\n\n",
                pad_end("TOTAL ORDEN:", 50),
                pad_start(&order.total().to_string(), 13)
            ));
        }

        let summary = summarize(orders);
        out.push_str(&rule('=', REPORT_WIDTH));
        out.push_str("\nRESUMEN ESTADÍSTICO:\n");
        out.push_str(&format!("Total de órdenes: {}\n", summary.order_count));
        out.push_str(&format!("Total de ingresos: {}\n", summary.total_revenue));
        out.push_str(&format!("Promedio por orden: {}\n", summary.average_order));
        out.push_str(&rule('=', REPORT_WIDTH));
        out.push('\n');
        out
    }
}

fn push_heading(out: &mut String, title: &str) {
    out.push_str(&rule('=', REPORT_WIDTH));
    out.push('\n');
    out.push_str(title);
    out.push('\n');
    out.push_str(&rule('=', REPORT_WIDTH));
    out.push_str("\n\n");
}

fn push_section(out: &mut String, title: &str) {
    out.push('\n');
    out.push_str(&rule('-', REPORT_WIDTH));
    out.push('\n');
    out.push_str(title);
    out.push('\n');
    out.push_str(&rule('-', REPORT_WIDTH));
    out.push('\n');
}

impl ReportWriter for TextReportWriter {
    fn write_closing(&self, report: &ClosingReport, now: DateTime<Local>) -> StoreResult<PathBuf> {
        self.write_dated(&self.closings, "cierre_caja", now, &self.render_closing(report))
    }

    fn write_order_listing(
        &self,
        orders: &[Order],
        now: DateTime<Local>,
    ) -> StoreResult<PathBuf> {
        self.write_dated(
            &self.saved_orders,
            "listado_ordenes",
            now,
            &self.render_listing(orders, now),
        )
    }
}
