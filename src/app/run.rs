//! Entry point for showing a scatter view in a native window.

use eframe::egui;

use crate::controller::ScatterController;
use crate::panels::ScatterPanel;

pub struct ScatterApp {
    panel: ScatterPanel,
}

impl ScatterApp {
    pub fn new(controller: ScatterController) -> Self {
        Self {
            panel: ScatterPanel::new(controller),
        }
    }

    pub fn panel_mut(&mut self) -> &mut ScatterPanel {
        &mut self.panel
    }
}

impl eframe::App for ScatterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::right("scatter_controls")
            .resizable(false)
            .show(ctx, |ui| self.panel.render_controls(ui));
        egui::TopBottomPanel::bottom("scatter_table")
            .resizable(true)
            .default_height(220.0)
            .show(ctx, |ui| self.panel.render_table(ui));
        egui::CentralPanel::default().show(ctx, |ui| self.panel.render_plot(ui));
    }
}

/// Open `controller` in a native window; blocks until the window is closed.
pub fn run_scatter(controller: ScatterController) -> eframe::Result<()> {
    let title = controller.config().title.clone();
    let opts = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(egui::vec2(1100.0, 900.0)),
        ..Default::default()
    };
    let app = ScatterApp::new(controller);
    eframe::run_native(&title, opts, Box::new(|_cc| Ok(Box::new(app))))
}
