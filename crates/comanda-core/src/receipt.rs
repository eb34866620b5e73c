//! # Receipt Rendering
//!
//! Text layouts for everything Comanda writes or shows about a sale or a
//! shift. Rendering is pure; the journal appends these strings and the CLI
//! prints them.
//!
//! ## Sales journal block
//! ```text
//! --- Venta #0007 - 2024-05-01 13:45:02 - Encargado: Ana
//!   H1 Hamburguesa Clásica x2 = ARS$7000.00
//!   E1 Papas Fritas x1 = ARS$1500.00
//!   TOTAL:  ARS$8500.00
//!   PAGO:   ARS$10000.00
//!   VUELTO: ARS$1500.00
//! ----------------------------------------------
//! ```
//!
//! ## Registry line
//! ```text
//! [2024-05-01 08:00:00] ENTRADA - Encargado: Ana
//! [2024-05-01 16:00:00] SALIDA  - Encargado: Ana
//! ```

use chrono::NaiveDateTime;
use std::fmt;

use crate::types::{Sale, ShiftEvent};
use crate::{SALE_HEADER_MARKER, SALE_RULE_WIDTH, TICKET_WIDTH, TIMESTAMP_FORMAT};

/// Formats a timestamp the way every journal and ticket shows it.
pub fn format_timestamp(at: &NaiveDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// True for the first line of a sale block.
///
/// ```rust
/// use comanda_core::receipt::is_sale_header;
///
/// assert!(is_sale_header("--- Venta #0001 - 2024-05-01 13:45:02 - Encargado: Ana"));
/// assert!(!is_sale_header("  TOTAL:  ARS$8500.00"));
/// assert!(!is_sale_header("----------------------------------------------"));
/// ```
pub fn is_sale_header(line: &str) -> bool {
    line.starts_with(SALE_HEADER_MARKER)
}

// =============================================================================
// Sales Journal Block
// =============================================================================

/// The block appended to the sales journal, newline terminated.
pub struct SaleRecord<'a>(pub &'a Sale);

impl fmt::Display for SaleRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sale = self.0;

        writeln!(
            f,
            "{}{:04} - {} - Encargado: {}",
            SALE_HEADER_MARKER,
            sale.id,
            format_timestamp(&sale.timestamp),
            sale.operator
        )?;
        for line in &sale.lines {
            writeln!(
                f,
                "  {} {} x{} = {}",
                line.code,
                line.name,
                line.quantity,
                line.line_total()
            )?;
        }
        writeln!(f, "  TOTAL:  {}", sale.subtotal)?;
        writeln!(f, "  PAGO:   {}", sale.paid)?;
        writeln!(f, "  VUELTO: {}", sale.change)?;
        writeln!(f, "{}", "-".repeat(SALE_RULE_WIDTH))
    }
}

pub fn render_sale_record(sale: &Sale) -> String {
    SaleRecord(sale).to_string()
}

// =============================================================================
// Customer Ticket
// =============================================================================

/// The on-screen ticket handed to the customer.
///
/// ```text
/// ================================
/// Ticket - Venta #0001
/// Fecha: 2024-05-01 13:45:02
/// Encargado/a: Ana
/// --------------------------------
/// Hamburguesa Clásica x 2 -> ARS$7000.00
/// --------------------------------
/// TOTAL : ARS$7000.00
/// PAGO  : ARS$10000.00
/// VUELTO: ARS$3000.00
/// ================================
/// ```
pub struct Ticket<'a>(pub &'a Sale);

impl fmt::Display for Ticket<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sale = self.0;
        let heavy = "=".repeat(TICKET_WIDTH);
        let light = "-".repeat(TICKET_WIDTH);

        writeln!(f, "{heavy}")?;
        writeln!(f, "Ticket - Venta #{:04}", sale.id)?;
        writeln!(f, "Fecha: {}", format_timestamp(&sale.timestamp))?;
        writeln!(f, "Encargado/a: {}", sale.operator)?;
        writeln!(f, "{light}")?;
        for line in &sale.lines {
            writeln!(f, "{} x{:>2} -> {}", line.name, line.quantity, line.line_total())?;
        }
        writeln!(f, "{light}")?;
        writeln!(f, "TOTAL : {}", sale.subtotal)?;
        writeln!(f, "PAGO  : {}", sale.paid)?;
        writeln!(f, "VUELTO: {}", sale.change)?;
        writeln!(f, "{heavy}")
    }
}

pub fn render_ticket(sale: &Sale) -> String {
    Ticket(sale).to_string()
}

// =============================================================================
// Registry Line
// =============================================================================

/// Renders one registry line, newline terminated.
pub fn render_shift_event(event: &ShiftEvent) -> String {
    format!(
        "[{}] {} - Encargado: {}\n",
        format_timestamp(&event.timestamp),
        event.kind.label(),
        event.operator
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::MenuCatalog;
    use crate::money::Money;
    use crate::types::{Order, ShiftEventKind};
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    fn sample_sale() -> Sale {
        let menu = MenuCatalog::default();
        let mut order = Order::new();
        order.add_line(menu.item_at(1).unwrap(), 2).unwrap();
        order.add_line(menu.item_at(4).unwrap(), 1).unwrap();
        Sale::complete(7, at(13, 45, 2), "Ana", order, Money::from_major(10000)).unwrap()
    }

    #[test]
    fn test_sale_record_layout() {
        let expected = "\
--- Venta #0007 - 2024-05-01 13:45:02 - Encargado: Ana
  H1 Hamburguesa Clásica x2 = ARS$7000.00
  E1 Papas Fritas x1 = ARS$1500.00
  TOTAL:  ARS$8500.00
  PAGO:   ARS$10000.00
  VUELTO: ARS$1500.00
----------------------------------------------
";
        assert_eq!(render_sale_record(&sample_sale()), expected);
    }

    #[test]
    fn test_sale_record_has_exactly_one_header() {
        let record = render_sale_record(&sample_sale());
        assert_eq!(record.lines().filter(|l| is_sale_header(l)).count(), 1);
    }

    #[test]
    fn test_ticket_layout() {
        let expected = "\
================================
Ticket - Venta #0007
Fecha: 2024-05-01 13:45:02
Encargado/a: Ana
--------------------------------
Hamburguesa Clásica x 2 -> ARS$7000.00
Papas Fritas x 1 -> ARS$1500.00
--------------------------------
TOTAL : ARS$8500.00
PAGO  : ARS$10000.00
VUELTO: ARS$1500.00
================================
";
        assert_eq!(render_ticket(&sample_sale()), expected);
    }

    #[test]
    fn test_shift_lines() {
        let entrance = ShiftEvent {
            timestamp: at(8, 0, 0),
            kind: ShiftEventKind::Entrance,
            operator: "Ana".to_string(),
        };
        let exit = ShiftEvent {
            timestamp: at(16, 0, 0),
            kind: ShiftEventKind::Exit,
            operator: "Ana".to_string(),
        };
        assert_eq!(
            render_shift_event(&entrance),
            "[2024-05-01 08:00:00] ENTRADA - Encargado: Ana\n"
        );
        assert_eq!(
            render_shift_event(&exit),
            "[2024-05-01 16:00:00] SALIDA  - Encargado: Ana\n"
        );
    }

    #[test]
    fn test_record_can_be_written_straight_to_a_formatter() {
        let sale = sample_sale();
        let written = format!("{}", SaleRecord(&sale));
        assert_eq!(written, render_sale_record(&sale));
        assert!(format!("{}", Ticket(&sale)).ends_with("VUELTO: ARS$1500.00\n================================\n"));
    }

    #[test]
    fn test_id_is_zero_padded() {
        let mut sale = sample_sale();
        sale.id = 12345;
        assert!(render_sale_record(&sale).starts_with("--- Venta #12345 - "));
        sale.id = 1;
        assert!(render_sale_record(&sale).starts_with("--- Venta #0001 - "));
    }
}
