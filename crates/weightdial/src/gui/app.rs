use crate::cli::Cli;
use crate::config;
use crate::events::AppEvent;
use crate::gui::{theme, view};
use dialkit::{DragEvent, Point, Rect, ScaleDial};
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

pub struct AppModel {
    pub dial: Rc<RefCell<ScaleDial>>,
    pub value: i32,
    pub cli: Cli,
    pub drawing_area: gtk::DrawingArea,
}

#[derive(Debug)]
pub enum AppMsg {
    Drag(DragEvent),
    Resize(f64, f64),
    ConfigReload,
    Quit,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::ConfigReload => AppMsg::ConfigReload,
        }
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = (ScaleDial, Cli, async_channel::Receiver<AppEvent>);
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            set_title: Some("Weight Dial"),
            set_default_size: (480, 400),

            add_controller = gtk::EventControllerKey {
                connect_key_pressed[sender] => move |_, key, _, _| {
                    if key == gtk::gdk::Key::Escape {
                        sender.input(AppMsg::Quit);
                        return glib::Propagation::Stop;
                    }
                    glib::Propagation::Proceed
                }
            },

            gtk::Box {
                set_orientation: gtk::Orientation::Vertical,

                gtk::Label {
                    add_css_class: "weightdial-value",
                    #[watch]
                    set_label: &model.value.to_string(),
                },

                #[name = "drawing_area"]
                gtk::DrawingArea {
                    set_hexpand: true,
                    set_vexpand: false,
                    set_content_height: 300,
                    add_css_class: "weightdial-drawing-area",

                    connect_resize[sender] => move |_, width, height| {
                        sender.input(AppMsg::Resize(f64::from(width), f64::from(height)));
                    },

                    // GTK emits drag-end on cancellation too, so a lost
                    // pointer always closes the session
                    add_controller = gtk::GestureDrag {
                        connect_drag_begin[sender] => move |_, x, y| {
                            sender.input(AppMsg::Drag(DragEvent::Start(Point::new(x, y))));
                        },
                        connect_drag_update[sender] => move |gesture, dx, dy| {
                            if let Some((x, y)) = gesture.start_point() {
                                let pointer = Point::new(x + dx, y + dy);
                                sender.input(AppMsg::Drag(DragEvent::Move(pointer)));
                            }
                        },
                        connect_drag_end[sender] => move |_, _, _| {
                            sender.input(AppMsg::Drag(DragEvent::End));
                        }
                    }
                }
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (dial, cli, rx) = init;

        theme::load_css();

        let model = AppModel {
            value: dial.value(),
            dial: Rc::new(RefCell::new(dial)),
            cli,
            drawing_area: gtk::DrawingArea::default(),
        };

        let widgets = view_output!();

        let mut model = model;
        model.drawing_area = widgets.drawing_area.clone();

        let dial_draw = model.dial.clone();
        widgets
            .drawing_area
            .set_draw_func(move |_, cr, _, _| match dial_draw.borrow().primitives() {
                Ok(primitives) => {
                    if let Err(e) = view::draw(cr, &primitives) {
                        log::error!("Drawing error: {}", e);
                    }
                }
                Err(e) => log::error!("Refusing to draw dial: {}", e),
            });

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        match msg {
            AppMsg::Drag(event) => {
                let result = self.dial.borrow_mut().handle(event);
                match result {
                    Ok(Some(value)) => {
                        self.value = value;
                        self.drawing_area.queue_draw();
                    }
                    Ok(None) => {}
                    Err(e) => log::warn!("Dropped drag event: {}", e),
                }
            }
            AppMsg::Resize(width, height) => {
                self.dial
                    .borrow_mut()
                    .resize(Rect::from_size(width, height));
                self.drawing_area.queue_draw();
            }
            AppMsg::ConfigReload => {
                let new_config = match config::load_config(&self.cli) {
                    Ok(c) => c,
                    Err(e) => {
                        log::error!("Failed to reload config: {}", e);
                        return;
                    }
                };

                let result = self.dial.borrow_mut().reconfigure(new_config);
                match result {
                    Ok(()) => {
                        self.value = self.dial.borrow().value();
                        self.drawing_area.queue_draw();
                        log::info!("Configuration reloaded");
                    }
                    Err(e) => log::error!("Rejected reloaded config: {}", e),
                }
            }
            AppMsg::Quit => relm4::main_application().quit(),
        }
    }
}
