use std::error::Error;
use std::fs::File;
use std::time::{Duration, Instant};

use pagedom::{parse_markup, Document, Element, Event, Key};
use showmore::{Registry, ShowMoreOptions};
use simplelog::{Config, LevelFilter, WriteLogger};

const PAGE: &str = r#"
<div id="page">
  <h1>Release notes</h1>
  <ul id="changes">
    <li>Faster startup</li>
    <li>New settings panel</li>
    <li>Dark theme</li>
    <li>Keyboard shortcuts</li>
    <li>Export to CSV</li>
    <li>Fix crash on resize</li>
    <li>Fix wrong totals</li>
    <li>Smaller binary</li>
  </ul>
  <div id="contributors">
    <div>alice</div>
    <div>bob</div>
  </div>
</div>
"#;

const OPTIONS: &str = r#"{
    "childSelector": "li",
    "showInitialNumberOfItems": 3,
    "showMoreNumberOfItems": 2,
    "showMoreMarkup": "<button class=\"more\">Show more changes</button>",
    "slideOptions": { "duration": "fast", "easing": "linear" }
}"#;

fn main() -> Result<(), Box<dyn Error>> {
    // Set up file logging
    let log_file = File::create("showmore.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;

    let mut doc = Document::new(parse_markup(PAGE)?);
    let mut widgets = Registry::new();

    let changes = "changes".to_string();
    widgets.attach(&mut doc, changes.clone(), &ShowMoreOptions::from_json(OPTIONS)?)?;
    // Two contributors fit under the default initial count, so no control.
    widgets.attach(&mut doc, "contributors".to_string(), &ShowMoreOptions::new())?;

    println!("== attached");
    print_outline(doc.root(), 0);

    let mut round = 1;
    while let Some(control) = widgets
        .get(&changes)
        .and_then(|widget| widget.control())
        .cloned()
    {
        // Alternate between mouse and keyboard activation.
        let event = if round % 2 == 1 {
            Event::click(control)
        } else {
            Event::key(control, Key::Enter)
        };
        let result = widgets.dispatch(&mut doc, &event);

        let start = Instant::now();
        while doc.has_active_slides() {
            doc.tick(start + Duration::from_millis(200));
        }

        println!("== activation {round}: {result:?}");
        print_outline(doc.root(), 0);
        round += 1;
    }

    Ok(())
}

fn print_outline(element: &Element, depth: usize) {
    if element.hidden {
        return;
    }
    let indent = "  ".repeat(depth);
    let children = element.child_elements();
    if children.is_empty() {
        println!("{indent}<{}> {}", element.tag, element.text_content());
    } else {
        println!("{indent}<{}#{}>", element.tag, element.id);
        for child in children {
            print_outline(child, depth + 1);
        }
    }
}
