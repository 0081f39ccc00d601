use crate::game::{GameSession, Move, Verdict};

use tracing::info;

pub struct GameApp {
    session: GameSession,
}

impl GameApp {
    pub fn new(session: GameSession) -> Self {
        info!("Rock Paper Scissors game initialized");
        Self { session }
    }
}

impl eframe::App for GameApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let typed: Vec<Move> = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::Text(text) => text.chars().next().and_then(Move::from_key),
                    _ => None,
                })
                .collect()
        });
        for player_move in typed {
            self.session.play_round(player_move);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.handle_game_ui(ui);
        });
    }
}

impl GameApp {
    fn handle_game_ui(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.group(|ui| {
                ui.set_width(400.0);
                ui.set_height(500.0);

                self.display_scores(ui);

                ui.add_space(10.0);

                self.render_choices(ui);

                ui.add_space(10.0);

                self.display_round(ui);

                ui.add_space(10.0);

                if ui
                    .button(
                        egui::RichText::new("🔄 Reset Game")
                            .size(25.0)
                            .color(egui::Color32::from_rgb(240, 148, 0)),
                    )
                    .clicked()
                {
                    self.session.reset();
                }

                ui.add_space(5.0);
                ui.label("Keys: 1/R rock, 2/P paper, 3/S scissors");
            });
        });
    }

    fn display_scores(&self, ui: &mut egui::Ui) {
        let scores = self.session.scores();
        let score_text = format!(
            "You {} : {} Computer",
            scores.player_score, scores.computer_score
        );

        ui.label(
            egui::RichText::new(score_text)
                .size(24.0)
                .color(egui::Color32::from_rgb(0, 191, 255)),
        );
    }

    fn render_choices(&mut self, ui: &mut egui::Ui) {
        let button_size = 100.0;

        ui.horizontal(|ui| {
            ui.add_space(40.0);
            for choice in Move::ALL {
                let button = ui.add(
                    egui::Button::new(
                        egui::RichText::new(format!("{}\n{}", choice.emoji(), choice)).size(24.0),
                    )
                    .min_size(egui::vec2(button_size, button_size)),
                );

                if button.clicked() {
                    self.session.play_round(choice);
                }
            }
        });
    }

    fn display_round(&self, ui: &mut egui::Ui) {
        let Some(round) = self.session.last_round() else {
            return;
        };

        ui.label(
            egui::RichText::new(format!(
                "{}  vs  {}",
                round.player_move.emoji(),
                round.computer_move.emoji()
            ))
            .size(50.0),
        );

        let color = match round.verdict {
            Verdict::Player => egui::Color32::from_rgb(34, 139, 34),
            Verdict::Computer => egui::Color32::from_rgb(255, 99, 71),
            Verdict::Tie => egui::Color32::from_rgb(180, 180, 180),
        };

        ui.label(
            egui::RichText::new(round.verdict.message())
                .size(30.0)
                .color(color),
        );
    }
}
