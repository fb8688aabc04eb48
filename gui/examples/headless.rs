//! Drives the controller through a short session without a toolkit and
//! prints what a frontend would draw after each step.
//!
//! Run with: `cargo run -q --example headless -p gaveta_gui`

use gaveta_core::{AppConfig, Cabinet, Drawer, Item, ItemName, Organizer};
use gaveta_gui::{Controller, InputEvent, Motion};

fn main() {
    let mut controller = Controller::new(sample_wall(), &AppConfig::default(), 35.0);
    controller.handle(InputEvent::Resize {
        width: 1280.0,
        height: 720.0,
    });
    step(&controller, "startup");

    controller.handle(InputEvent::Motion(Motion::Down));
    step(&controller, "keyboard focus enters the wall");

    controller.handle(InputEvent::Enter);
    step(&controller, "drill into the drawer");

    controller.handle(InputEvent::TextChanged("Fuse box key".to_string()));
    controller.handle(InputEvent::Enter);
    step(&controller, "store an item");

    controller.handle(InputEvent::Cancel);
    controller.handle(InputEvent::TextChanged("cable".to_string()));
    step(&controller, "search for \"cable\"");

    controller.handle(InputEvent::Motion(Motion::Down));
    controller.handle(InputEvent::Enter);
    step(&controller, "jump to the first hit");
}

fn step(controller: &Controller, what: &str) {
    let scene = controller.scene();
    println!("== {what}");
    println!("   state: {:?}", controller.state());
    if let Some(id) = controller.active_drawer() {
        println!(
            "   active drawer: cabinet {} / drawer {}",
            id.cabinet, id.drawer
        );
    }
    let list = controller.result_list();
    if !list.entries().is_empty() {
        println!(
            "   list: {:?} (cursor {:?})",
            list.entries(),
            list.selected()
        );
    }
    println!(
        "   scene: {} rects, {} meshes, {} labels",
        scene.rects.len(),
        scene.meshes.len(),
        scene.labels.len()
    );
}

fn sample_wall() -> Organizer {
    let mut tools = Drawer::new();
    tools.add_item(item("Side cutters"));
    tools.add_item(item("Cable stripper"));
    let mut spares = Drawer::new();
    spares.add_item(item("HDMI cable"));

    Organizer::new(
        2,
        1,
        vec![
            Cabinet::with_drawers(0, 0, 1, 1, vec![tools, Drawer::new()]),
            Cabinet::with_drawers(1, 0, 1, 1, vec![spares]),
        ],
    )
}

fn item(name: &str) -> Item {
    Item::new(ItemName::try_from(name).unwrap(), None)
}
