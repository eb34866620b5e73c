//! # Main Menu Loop
//!
//! ```text
//! 🍔 Bienvenid@ al Sistema de Pedidos - Hamburguesería
//!
//! Menú principal:
//!  1) Registrar ENTRADA
//!  2) Registrar SALIDA
//!  3) Tomar pedido
//!  4) Ver ventas.txt
//!  5) Ver registro.txt
//!  0) Salir
//! Opción:
//! ```
//!
//! Runs until "0" or end of input. An open shift is not closed on exit.

use std::io::{BufRead, Write};
use tracing::{debug, info};

use crate::commands::{order, shift, viewer};
use crate::console::Console;
use crate::error::CliResult;
use crate::state::{AppConfig, SessionState};
use comanda_journal::Journal;

/// Main menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    Exit,
    RegisterEntrance,
    RegisterExit,
    TakeOrder,
    ViewSales,
    ViewRegistry,
}

impl MenuOption {
    /// Maps an answer already bounded to `0..=5`.
    pub fn from_number(n: i64) -> Option<Self> {
        match n {
            0 => Some(MenuOption::Exit),
            1 => Some(MenuOption::RegisterEntrance),
            2 => Some(MenuOption::RegisterExit),
            3 => Some(MenuOption::TakeOrder),
            4 => Some(MenuOption::ViewSales),
            5 => Some(MenuOption::ViewRegistry),
            _ => None,
        }
    }
}

/// The counter terminal: console plus state.
pub struct App<R, W> {
    console: Console<R, W>,
    config: AppConfig,
    journal: Journal,
    session: SessionState,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(console: Console<R, W>, config: AppConfig, journal: Journal, session: SessionState) -> Self {
        App {
            console,
            config,
            journal,
            session,
        }
    }

    /// Shows the banner and serves the main menu.
    ///
    /// End of input finishes the session like "0) Salir", without the
    /// farewell line. Any other error is returned.
    pub fn run(&mut self) -> CliResult<()> {
        self.console.say(format!(
            "🍔 Bienvenid@ al Sistema de Pedidos - {}",
            self.config.store_name
        ))?;

        match self.serve() {
            Err(e) if e.is_end_of_input() => {
                info!("Input closed, leaving");
                Ok(())
            }
            other => other,
        }
    }

    fn serve(&mut self) -> CliResult<()> {
        loop {
            self.show_main_menu()?;
            let answer = self.console.read_int("Opción: ", Some(0), Some(5))?;
            let Some(option) = MenuOption::from_number(answer) else {
                continue;
            };
            debug!(?option, "Main menu choice");

            match option {
                MenuOption::RegisterEntrance => {
                    shift::register_entrance(&mut self.console, &self.journal, &mut self.session)?
                }
                MenuOption::RegisterExit => {
                    shift::register_exit(&mut self.console, &self.journal, &mut self.session)?
                }
                MenuOption::TakeOrder => {
                    order::take_order(&mut self.console, &self.config, &self.journal, &self.session)?
                }
                MenuOption::ViewSales => viewer::show_file(
                    &mut self.console,
                    &self.journal.config().sales_path,
                    &self.config.sales_file,
                )?,
                MenuOption::ViewRegistry => viewer::show_file(
                    &mut self.console,
                    &self.journal.config().registry_path,
                    &self.config.registry_file,
                )?,
                MenuOption::Exit => {
                    info!("Operator chose to leave");
                    return self.console.say("¡Gracias! Hasta luego.");
                }
            }
        }
    }

    fn show_main_menu(&mut self) -> CliResult<()> {
        self.console.say("\nMenú principal:")?;
        self.console.say(" 1) Registrar ENTRADA")?;
        self.console.say(" 2) Registrar SALIDA")?;
        self.console.say(" 3) Tomar pedido")?;
        self.console.say(format!(" 4) Ver {}", self.config.sales_file))?;
        self.console.say(format!(" 5) Ver {}", self.config.registry_file))?;
        self.console.say(" 0) Salir")
    }
}
