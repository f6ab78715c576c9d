use crate::config::Config;
use crate::dashboard::Dashboard;
use crate::io::{spawn_worker, AnalysisClient, FetchError, IoCommand, IoResult};
use crate::message::Message;
use crate::style;
use eframe::egui;
use std::cell::RefCell;
use std::sync::mpsc::{Receiver, Sender};
use std::sync::Arc;
use tracing::warn;

pub struct QianApp {
    dashboard: Dashboard,
    command_sender: Sender<IoCommand>,
    result_receiver: Receiver<IoResult>,
    window_title: String,
}

impl QianApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: &Config) -> Result<Self, FetchError> {
        let client = AnalysisClient::new(&config.api)?;
        let (command_sender, result_receiver) = spawn_worker(cc.egui_ctx.clone(), Arc::new(client));

        let dashboard = Dashboard::new(config);
        cc.egui_ctx.set_visuals(dashboard.ui.theme.visuals());

        Ok(Self {
            dashboard,
            command_sender,
            result_receiver,
            window_title: String::new(),
        })
    }

    fn dispatch(&mut self, message: Message) {
        if let Some(command) = self.dashboard.update(message) {
            if self.command_sender.send(command).is_err() {
                warn!("IO worker is gone, dropping command");
            }
        }
    }

    fn process_async_results(&mut self) {
        while let Ok(result) = self.result_receiver.try_recv() {
            match result {
                IoResult::IndicatorsLoaded {
                    ticket,
                    ticker,
                    result,
                } => self.dispatch(Message::IndicatorsLoaded {
                    ticket,
                    ticker,
                    result,
                }),
            }
        }
    }
}

impl eframe::App for QianApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_async_results();

        // Deferred actions
        let pending = RefCell::new(Vec::new());

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            self.dashboard.render_header(ui, &pending);
        });

        let active = self.dashboard.active_destination().map(str::to_string);
        egui::SidePanel::left("navigation")
            .resizable(true)
            .default_width(self.dashboard.ui.sidebar_width)
            .width_range(style::SIDEBAR_MIN..=style::SIDEBAR_MAX)
            .show_animated(ctx, self.dashboard.ui.sidebar_open, |ui| {
                if let Some(message) = self.dashboard.navigation.render(ui, active.as_deref()) {
                    pending.borrow_mut().push(message);
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.set_max_width(style::CONTENT_MAX_WIDTH);
                    ui.add_space(16.0);
                    self.dashboard.render_search(ui, &pending);
                    ui.add_space(24.0);
                    self.dashboard.render_indicators(ui);
                });
        });

        // Apply deferred actions
        for message in pending.into_inner() {
            self.dispatch(message);
        }

        let title = self.dashboard.title();
        if title != self.window_title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.window_title = title;
        }
    }
}
