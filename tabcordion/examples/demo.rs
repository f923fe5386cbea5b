use std::time::{Duration, Instant};

use htmldom::{to_html, Element};
use simplelog::{Config, LevelFilter, SimpleLogger};
use tabcordion::{collapse, CollapseOptions, Registry, TabcordionOptions};

fn main() {
    SimpleLogger::init(LevelFilter::Debug, Config::default()).expect("Failed to initialize logger");

    // Live toggler: narrow at attach, widened after a settled resize
    let mut registry = Registry::new();
    let mut container = tabbed_container("features");

    registry.attach(
        &mut container,
        TabcordionOptions::new()
            .break_width(500)
            .delay(Duration::from_millis(500)),
        320,
    );
    println!("--- narrow viewport (accordion) ---\n{}\n", to_html(&container));

    let t0 = Instant::now();
    registry.notify_resize(1024, t0);
    registry.tick(&mut container, t0 + Duration::from_millis(500));
    println!("--- wide viewport (tabs) ---\n{}\n", to_html(&container));

    // One-shot collapser: rewrites in place, never reverts
    let mut oneshot = tabbed_container("sidebar");
    collapse::attach(&mut oneshot, &CollapseOptions::new().break_width(500), 320);
    println!("--- one-shot collapse ---\n{}", to_html(&oneshot));
}

fn tabbed_container(id: &str) -> Element {
    Element::div()
        .id(id)
        .child(
            Element::ul()
                .class("nav-tabs")
                .child(Element::li().child(Element::anchor("#intro").raw_html("Intro")))
                .child(Element::li().child(Element::anchor("#specs").raw_html("Specs"))),
        )
        .child(
            Element::div()
                .class("tab-content")
                .child(
                    Element::section()
                        .id("intro")
                        .class("tab-pane")
                        .raw_html("<p>Welcome</p>"),
                )
                .child(
                    Element::section()
                        .id("specs")
                        .class("tab-pane")
                        .raw_html("<table></table>"),
                ),
        )
}
