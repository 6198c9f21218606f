//! The catalog page: counter section, searchable hero list, detail card.

use catalog_core::{counter_title, CatalogState};
use eframe::egui;
use shared::Hero;

use crate::controller::events::CatalogAction;
use crate::controller::reducer::apply_action;

const GREETING_NAME: &str = "SARI Rim";
const LIST_WIDTH_FRACTION: f32 = 0.7;
const HERO_ROW_HEIGHT: f32 = 28.0;

pub struct HeroCatalogApp {
    state: CatalogState,
    // Last counter value published to the window title; `None` until the
    // first frame so the initial value is published too.
    published_title_counter: Option<i64>,
}

impl HeroCatalogApp {
    pub fn new(state: CatalogState) -> Self {
        Self {
            state,
            published_title_counter: None,
        }
    }

    /// Host-environment side effect: the window title tracks the
    /// counter. Runs after the frame's state mutations have been
    /// applied; the viewport command itself is processed by the
    /// framework's own pass, never synchronously with the mutation.
    fn publish_title_if_counter_changed(&mut self, ctx: &egui::Context) {
        let counter = self.state.counter();
        if self.published_title_counter != Some(counter) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(counter_title(counter)));
            self.published_title_counter = Some(counter);
        }
    }

    fn show_counter_section(&self, ui: &mut egui::Ui, actions: &mut Vec<CatalogAction>) {
        ui.label(egui::RichText::new(counter_title(self.state.counter())).size(35.0));
        ui.add_space(6.0);

        ui.horizontal(|ui| {
            let half = ui.available_width() * 0.5;
            ui.add_space((half - 90.0).max(0.0));
            if ui
                .add_sized([40.0, 28.0], egui::Button::new(egui::RichText::new("+").strong()))
                .clicked()
            {
                actions.push(CatalogAction::CounterIncremented);
            }
            ui.add_space(10.0);
            if ui
                .add_sized([110.0, 28.0], egui::Button::new("Réinitialiser"))
                .clicked()
            {
                actions.push(CatalogAction::CounterReset);
            }
        });
    }

    fn show_search_field(&self, ui: &mut egui::Ui, actions: &mut Vec<CatalogAction>) {
        // The state string stays authoritative; the buffer only carries
        // this frame's edit back through the reducer.
        let mut search_buf = self.state.search().to_string();
        let edit = egui::TextEdit::singleline(&mut search_buf)
            .id_salt("hero_search")
            .hint_text(
                egui::RichText::new("Rechercher un héros…")
                    .color(ui.visuals().weak_text_color().gamma_multiply(0.85)),
            )
            .desired_width(f32::INFINITY);
        let response = ui.add_sized(
            [ui.available_width() * LIST_WIDTH_FRACTION, 30.0],
            edit,
        );
        if response.changed() {
            actions.push(CatalogAction::SearchChanged(search_buf));
        }
    }

    fn hero_row(&self, ui: &mut egui::Ui, hero: &Hero) -> egui::Response {
        let selected = self.state.selected() == Some(hero.id);
        let (rect, response) = ui.allocate_exact_size(
            egui::vec2(ui.available_width() * LIST_WIDTH_FRACTION, HERO_ROW_HEIGHT),
            egui::Sense::click(),
        );

        let row_fill = if selected {
            ui.visuals().selection.bg_fill.gamma_multiply(0.35)
        } else if response.hovered() {
            ui.visuals().widgets.hovered.bg_fill
        } else {
            ui.visuals().faint_bg_color
        };
        ui.painter()
            .rect_filled(rect, egui::CornerRadius::same(6), row_fill);
        if selected {
            ui.painter().rect_stroke(
                rect,
                egui::CornerRadius::same(6),
                egui::Stroke::new(1.0, ui.visuals().selection.bg_fill.gamma_multiply(0.9)),
                egui::StrokeKind::Inside,
            );
        }
        ui.painter().text(
            rect.left_center() + egui::vec2(10.0, 0.0),
            egui::Align2::LEFT_CENTER,
            &hero.name,
            egui::TextStyle::Body.resolve(ui.style()),
            ui.visuals().text_color(),
        );

        response.on_hover_cursor(egui::CursorIcon::PointingHand)
    }

    fn show_hero_list(&self, ui: &mut egui::Ui, actions: &mut Vec<CatalogAction>) {
        let displayed = self.state.displayed();
        if displayed.is_empty() {
            // Exactly one placeholder row stands in for the list.
            ui.add_space(8.0);
            ui.weak("Aucun résultat…");
            return;
        }

        ui.add_space(8.0);
        for hero in &displayed {
            if self.hero_row(ui, hero).clicked() {
                actions.push(CatalogAction::HeroSelected(hero.id));
            }
            ui.add_space(4.0);
        }
    }

    fn show_detail_card(&self, ui: &mut egui::Ui) {
        if self.state.selected_hero().is_none() {
            return;
        }

        ui.add_space(12.0);
        egui::Frame::NONE
            .fill(ui.visuals().faint_bg_color)
            .stroke(egui::Stroke::new(
                1.0,
                ui.visuals().widgets.noninteractive.bg_stroke.color,
            ))
            .corner_radius(12.0)
            .inner_margin(egui::Margin::symmetric(20, 16))
            .show(ui, |ui| {
                ui.set_min_size(egui::vec2(
                    ui.available_width() * LIST_WIDTH_FRACTION,
                    48.0,
                ));
                // TODO: render hero details (image, external id, slug) in
                // the card; for now the panel itself is the whole content.
            });
    }
}

impl eframe::App for HeroCatalogApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut actions: Vec<CatalogAction> = Vec::new();

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading(format!("Bonjour {GREETING_NAME} !"));

                    ui.add_space(16.0);
                    ui.separator();
                    ui.add_space(16.0);

                    self.show_counter_section(ui, &mut actions);

                    ui.add_space(16.0);
                    ui.separator();
                    ui.add_space(16.0);

                    ui.heading("Liste des super-héros");
                    ui.add_space(6.0);
                    ui.strong(format!(
                        "La liste contient {} super-héros :",
                        self.state.total()
                    ));
                    ui.add_space(10.0);

                    self.show_search_field(ui, &mut actions);
                    self.show_hero_list(ui, &mut actions);
                    self.show_detail_card(ui);

                    ui.add_space(24.0);
                });
            });
        });

        for action in actions {
            apply_action(&mut self.state, action);
        }
        self.publish_title_if_counter_changed(ctx);
    }
}
