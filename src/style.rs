use eframe::egui::{self, Color32, CornerRadius, Margin, Response, RichText, Stroke, Ui, Vec2};

pub const PRIMARY: Color32 = Color32::from_rgb(0x00, 0x66, 0xcc);
pub const PRIMARY_HOVER: Color32 = Color32::from_rgb(0x00, 0x52, 0xa3);
pub const BORDER: Color32 = Color32::from_rgb(0xdd, 0xdd, 0xdd);
pub const PANEL: Color32 = Color32::from_rgb(0xf8, 0xf9, 0xfa);
pub const HOVER: Color32 = Color32::from_rgb(0xf0, 0xf0, 0xf0);
pub const SIDEBAR_HOVER: Color32 = Color32::from_rgb(0xe9, 0xec, 0xef);
pub const FILTER_HOVER: Color32 = Color32::from_rgb(0xe0, 0xe0, 0xe0);
pub const MUTED: Color32 = Color32::from_rgb(0x66, 0x66, 0x66);
pub const TEXT: Color32 = Color32::from_rgb(0x33, 0x33, 0x33);
pub const LOGO: Color32 = Color32::from_rgb(0x2d, 0x34, 0x36);

/// Colours for one button across its idle and hovered states.
#[derive(Debug, Clone, Copy)]
pub struct ButtonPalette {
    pub fill: Color32,
    pub hover_fill: Color32,
    pub text: Color32,
    pub hover_text: Color32,
    pub border: Stroke,
    pub radius: u8,
    pub padding: Vec2,
}

impl ButtonPalette {
    pub const PRIMARY: Self = Self {
        fill: PRIMARY,
        hover_fill: PRIMARY_HOVER,
        text: Color32::WHITE,
        hover_text: Color32::WHITE,
        border: Stroke::NONE,
        radius: 4,
        padding: Vec2::new(15.0, 8.0),
    };

    pub const SECONDARY: Self = Self {
        fill: Color32::WHITE,
        hover_fill: HOVER,
        text: TEXT,
        hover_text: TEXT,
        border: Stroke {
            width: 1.0,
            color: BORDER,
        },
        radius: 4,
        padding: Vec2::new(15.0, 8.0),
    };

    pub const FILTER: Self = Self {
        fill: Color32::TRANSPARENT,
        hover_fill: FILTER_HOVER,
        text: MUTED,
        hover_text: Color32::BLACK,
        border: Stroke::NONE,
        radius: 0,
        padding: Vec2::new(10.0, 5.0),
    };

    pub const SIDEBAR: Self = Self {
        fill: Color32::TRANSPARENT,
        hover_fill: SIDEBAR_HOVER,
        text: TEXT,
        hover_text: TEXT,
        border: Stroke::NONE,
        radius: 0,
        padding: Vec2::new(20.0, 10.0),
    };

    pub const ICON: Self = Self {
        fill: Color32::TRANSPARENT,
        hover_fill: HOVER,
        text: TEXT,
        hover_text: TEXT,
        border: Stroke::NONE,
        radius: 16,
        padding: Vec2::ZERO,
    };
}

/// Light theme with the grey hairlines used for panel borders.
pub fn apply(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::light();
    visuals.panel_fill = Color32::WHITE;
    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, BORDER);
    ctx.set_visuals(visuals);
}

/// Adds a button painted with `palette`, optionally forced to `size`.
pub fn button(ui: &mut Ui, text: impl Into<RichText>, palette: ButtonPalette, size: Option<Vec2>) -> Response {
    ui.scope(|ui| {
        ui.spacing_mut().button_padding = palette.padding;

        let widgets = &mut ui.visuals_mut().widgets;
        for (state, fill, text) in [
            (&mut widgets.inactive, palette.fill, palette.text),
            (&mut widgets.hovered, palette.hover_fill, palette.hover_text),
            (&mut widgets.active, palette.hover_fill, palette.hover_text),
        ] {
            state.bg_fill = fill;
            state.weak_bg_fill = fill;
            state.fg_stroke.color = text;
            state.bg_stroke = palette.border;
            state.corner_radius = CornerRadius::same(palette.radius);
            state.expansion = 0.0;
        }

        let mut button = egui::Button::new(text.into());
        if let Some(size) = size {
            button = button.min_size(size);
        }
        ui.add(button)
    })
    .inner
}

/// Panel background with the padding the bars use.
pub fn bar_frame(fill: Color32) -> egui::Frame {
    egui::Frame::new().fill(fill).inner_margin(Margin::symmetric(10, 5))
}
