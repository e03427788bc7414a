//! Panel chrome shared by the shell's windows.

use egui::{Align, Area, Context, Frame, Id, Layout, Order, Rect, Response, Sense, Ui, Vec2};
use egui::{WidgetInfo, WidgetType};

/// Id of the close control in a panel's header
pub fn close_button_id(panel: &str) -> Id {
    Id::new(panel).with("close_button")
}

/// Show an undecorated panel whose outer rect is exactly `rect`
///
/// The area is registered under `Id::new(name)`.
pub fn show_docked<R>(
    ctx: &Context,
    name: &str,
    rect: Rect,
    add_contents: impl FnOnce(&mut Ui) -> R,
) -> R {
    let frame = Frame::window(&ctx.style());
    let content = (rect.size() - frame.total_margin().sum()).max(Vec2::ZERO);

    Area::new(Id::new(name))
        .order(Order::Background)
        .fixed_pos(rect.min)
        .constrain(false)
        .movable(false)
        .show(ctx, |ui| {
            frame
                .show(ui, |ui| {
                    ui.set_width(content.x);
                    ui.set_height(content.y);
                    add_contents(ui)
                })
                .inner
        })
        .inner
}

/// Title row with a close control on the right; clicking it clears `open`
pub fn header(ui: &mut Ui, title: &str, open: &mut bool) {
    ui.horizontal(|ui| {
        ui.strong(title);
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if close_button(ui, close_button_id(title)).clicked() {
                *open = false;
            }
        });
    });
    ui.separator();
}

fn close_button(ui: &mut Ui, id: Id) -> Response {
    let size = Vec2::splat(ui.spacing().icon_width);
    let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
    let response = ui.interact(rect, id, Sense::click());
    response.widget_info(|| WidgetInfo::labeled(WidgetType::Button, ui.is_enabled(), "Close"));

    let visuals = ui.style().interact(&response);
    let cross = rect.shrink(2.0).expand(visuals.expansion);
    let painter = ui.painter();
    painter.line_segment([cross.left_top(), cross.right_bottom()], visuals.fg_stroke);
    painter.line_segment([cross.right_top(), cross.left_bottom()], visuals.fg_stroke);

    response
}
