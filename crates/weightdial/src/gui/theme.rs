use cairo::Context;
use dialkit::Color;
use gtk::gdk;
use gtk4 as gtk;

pub fn set_source_color(cr: &Context, color: Color) {
    let (r, g, b, a) = color.into_components();
    cr.set_source_rgba(r, g, b, a);
}

pub fn load_css() {
    let provider = gtk::CssProvider::new();
    let css_data = "
.weightdial-value {
    font-size: 32px;
    font-weight: bold;
    margin: 12px;
}
.weightdial-drawing-area {
    background: none;
    background-color: transparent;
}
";
    provider.load_from_data(css_data);

    if let Some(display) = gdk::Display::default() {
        gtk::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}
