//! # Order Command
//!
//! Takes one order from menu selection to printed ticket.
//!
//! ## Order Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Taking an Order                                      │
//! │                                                                         │
//! │  1. Shift check ──► nobody on duty? warn, back to main menu            │
//! │                                                                         │
//! │  2. Selection loop                                                     │
//! │     ├── show menu rows + "0. Terminar pedido"                          │
//! │     ├── item number in [0, menu size]   (0 ends the loop)              │
//! │     └── quantity in [1, 50]             (a line per pick, no merging)  │
//! │                                                                         │
//! │  3. Empty order? "Pedido vacío. No se registró venta." and return      │
//! │                                                                         │
//! │  4. Payment loop: ask until paid >= subtotal                           │
//! │                                                                         │
//! │  5. next id ← scan ventas.txt                                          │
//! │     append sale block, print ticket                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing touches the journal before step 5.

use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

use crate::console::Console;
use crate::error::CliResult;
use crate::state::{AppConfig, SessionState};
use comanda_core::receipt::render_ticket;
use comanda_core::validation::validate_quantity;
use comanda_core::{
    CoreError, CoreResult, MenuCatalog, MenuItem, Money, Order, Sale, MAX_LINE_QUANTITY,
    MIN_LINE_QUANTITY,
};
use comanda_journal::Journal;

/// Runs the whole order dialogue for the operator on duty.
pub fn take_order<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &AppConfig,
    journal: &Journal,
    session: &SessionState,
) -> CliResult<()> {
    let operator = match session.shift.require_operator() {
        Ok(operator) => operator.to_string(),
        Err(e) => {
            warn!("Order refused: no shift open");
            console.warn(e)?;
            return Ok(());
        }
    };

    let order = select_items(console, &config.menu)?;
    if order.is_empty() {
        debug!("Order finished without items");
        console.say("Pedido vacío. No se registró venta.")?;
        return Ok(());
    }

    let subtotal = order.subtotal();
    console.say(format!("Subtotal: {subtotal}"))?;
    let paid = collect_payment(console, &order)?;

    let sales = journal.sales();
    let id = sales.next_sale_id()?;
    let sale = Sale::complete(id, session.now(), operator, order, paid)?;
    sales.record(&sale)?;

    info!(
        id = sale.id,
        operator = %sale.operator,
        total = %sale.subtotal,
        "Sale recorded"
    );

    console.say("")?;
    console.print_block(&render_ticket(&sale))?;
    console.say("")
}

/// Menu loop; returns when the operator picks 0.
fn select_items<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    menu: &MenuCatalog,
) -> CliResult<Order> {
    let mut order = Order::new();
    let last = i64::try_from(menu.len()).unwrap_or(i64::MAX);

    loop {
        show_menu(console, menu)?;
        let choice = console.read_int(
            "Elija un ítem por número (0 para terminar): ",
            Some(0),
            Some(last),
        )?;
        if choice == 0 {
            return Ok(order);
        }

        let item = match lookup(menu, choice) {
            Ok(item) => item,
            Err(e) => {
                console.warn(e)?;
                continue;
            }
        };

        let quantity = console.read_int(
            &format!("Cantidad para '{}': ", item.name),
            Some(i64::from(MIN_LINE_QUANTITY)),
            Some(i64::from(MAX_LINE_QUANTITY)),
        )?;
        let quantity = match validate_quantity(quantity) {
            Ok(quantity) => quantity,
            Err(e) => {
                console.warn(e)?;
                continue;
            }
        };

        match order.add_line(item, quantity) {
            Ok(line) => debug!(code = %line.code, quantity = line.quantity, "Line added"),
            Err(e) => console.warn(e)?,
        }
    }
}

/// Menu item at the 1-based position the operator typed.
fn lookup(menu: &MenuCatalog, choice: i64) -> CoreResult<&MenuItem> {
    let position = usize::try_from(choice).unwrap_or(0);
    menu.item_at(position).ok_or(CoreError::ItemNotFound { position })
}

fn show_menu<R: BufRead, W: Write>(console: &mut Console<R, W>, menu: &MenuCatalog) -> CliResult<()> {
    console.say("\n=== MENÚ ===")?;
    for row in menu.rows() {
        console.say(row)?;
    }
    console.say("  0. Terminar pedido")
}

/// Asks for the amount received until it covers the subtotal.
fn collect_payment<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    order: &Order,
) -> CliResult<Money> {
    loop {
        let paid = console.read_decimal("Importe recibido: ")?;
        match order.change_for(paid) {
            Ok(_) => return Ok(paid),
            Err(e) => console.warn(e)?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn lunch() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(13, 45, 2)
            .unwrap()
    }

    struct Fixture {
        _dir: TempDir,
        config: AppConfig,
        journal: Journal,
        session: SessionState,
    }

    fn fixture(on_duty: bool) -> Fixture {
        let dir = TempDir::new().unwrap();
        let config = AppConfig::default().with_data_dir(dir.path());
        let journal = Journal::open(config.journal_config()).unwrap();
        let mut session = SessionState::new().with_clock(lunch);
        if on_duty {
            session.shift.enter("Ana", lunch()).unwrap();
        }
        Fixture {
            _dir: dir,
            config,
            journal,
            session,
        }
    }

    fn take(f: &Fixture, script: &str) -> (CliResult<()>, String) {
        let mut out = Vec::new();
        let result = {
            let mut console = Console::new(Cursor::new(script), &mut out);
            take_order(&mut console, &f.config, &f.journal, &f.session)
        };
        (result, String::from_utf8(out).unwrap())
    }

    fn sales_file(f: &Fixture) -> String {
        fs::read_to_string(f.journal.sales().path()).unwrap()
    }

    #[test]
    fn test_order_without_shift_is_refused() {
        let f = fixture(false);
        let (result, out) = take(&f, "1\n2\n0\n");

        assert!(result.is_ok());
        assert_eq!(out, "⚠️  Debe registrar ENTRADA antes de tomar pedidos.\n");
        assert_eq!(sales_file(&f), "");
    }

    #[test]
    fn test_empty_order_writes_nothing() {
        let f = fixture(true);
        let (result, out) = take(&f, "0\n");

        assert!(result.is_ok());
        assert!(out.contains("=== MENÚ ==="));
        assert!(out.ends_with("Pedido vacío. No se registró venta.\n"));
        assert_eq!(sales_file(&f), "");
    }

    #[test]
    fn test_full_order_with_change() {
        let f = fixture(true);
        let (result, out) = take(&f, "1\n2\n0\n10000\n");

        assert!(result.is_ok());
        assert!(out.contains("Cantidad para 'Hamburguesa Clásica': "));
        assert!(out.contains("Subtotal: ARS$7000.00\n"));
        assert!(out.contains("Ticket - Venta #0001\n"));
        assert!(out.contains("Hamburguesa Clásica x 2 -> ARS$7000.00\n"));
        assert!(out.contains("VUELTO: ARS$3000.00\n"));

        assert_eq!(
            sales_file(&f),
            "--- Venta #0001 - 2024-05-01 13:45:02 - Encargado: Ana\n\
             \x20 H1 Hamburguesa Clásica x2 = ARS$7000.00\n\
             \x20 TOTAL:  ARS$7000.00\n\
             \x20 PAGO:   ARS$10000.00\n\
             \x20 VUELTO: ARS$3000.00\n\
             ----------------------------------------------\n"
        );
    }

    #[test]
    fn test_short_payment_asks_again() {
        let f = fixture(true);
        let (result, out) = take(&f, "4\n1\n0\n1000\n1500,00\n");

        assert!(result.is_ok());
        assert!(out.contains("⚠️  El pago es menor que el total (ARS$1500.00). Faltan ARS$500.00."));
        assert_eq!(out.matches("Importe recibido: ").count(), 2);
        assert!(sales_file(&f).contains("  VUELTO: ARS$0.00\n"));
    }

    #[test]
    fn test_out_of_range_inputs_are_reprompted() {
        let f = fixture(true);
        let (result, out) = take(&f, "8\n1\n0\n51\n3\n0\n20000\n");

        assert!(result.is_ok());
        assert!(out.contains("⚠️  Debe ser <= 7."));
        assert!(out.contains("⚠️  Debe ser >= 1."));
        assert!(out.contains("⚠️  Debe ser <= 50."));
        assert!(sales_file(&f).contains("  H1 Hamburguesa Clásica x3 = ARS$10500.00\n"));
    }

    #[test]
    fn test_same_item_twice_keeps_two_lines() {
        let f = fixture(true);
        let (_, _) = take(&f, "5\n1\n5\n2\n0\n5000\n");

        let content = sales_file(&f);
        assert!(content.contains("  B1 Gaseosa x1 = ARS$1200.00\n"));
        assert!(content.contains("  B1 Gaseosa x2 = ARS$2400.00\n"));
        assert!(content.contains("  TOTAL:  ARS$3600.00\n"));
    }

    #[test]
    fn test_end_of_input_mid_order_writes_nothing() {
        let f = fixture(true);
        let (result, _) = take(&f, "1\n2\n0\n");

        assert!(result.unwrap_err().is_end_of_input());
        assert_eq!(sales_file(&f), "");
    }

    #[test]
    fn test_lookup_reports_missing_positions() {
        let menu = MenuCatalog::default();

        assert_eq!(lookup(&menu, 1).unwrap().code, "H1");
        assert_eq!(lookup(&menu, 7).unwrap().code, "P1");
        assert_eq!(lookup(&menu, 8), Err(CoreError::ItemNotFound { position: 8 }));
        assert_eq!(lookup(&menu, 0), Err(CoreError::ItemNotFound { position: 0 }));
        assert_eq!(lookup(&menu, -2), Err(CoreError::ItemNotFound { position: 0 }));
    }

    #[test]
    fn test_ids_continue_across_orders() {
        let f = fixture(true);
        take(&f, "1\n1\n0\n3500\n").0.unwrap();
        let (_, out) = take(&f, "2\n1\n0\n4200\n");

        assert!(out.contains("Ticket - Venta #0002"));
        assert_eq!(sales_file(&f).matches("--- Venta #").count(), 2);
    }
}
