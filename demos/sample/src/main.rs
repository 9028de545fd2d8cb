// Copyright 2026 the Expandable Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lays out the sample screens with Parley, clicks each one twice and prints where the text was
//! cut and where the toggle landed.
//!
//! Set `RUST_LOG=expandable_text=trace` to follow the render passes.

use expandable_text::parley_host::{ParleyHost, ParleyLayout, ToggleElement};
use expandable_text::{ExpandableText, ExpandableTextConfig, TextLayout, TextStyle, Toggle};

const WIDTH: f32 = 360.0;

const LOREM: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod \
tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud \
exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat. Duis aute irure dolor in \
reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla pariatur. Excepteur sint \
occaecat cupidatat non proident, sunt in culpa qui officia deserunt mollit anim id est laborum. \
Sed ut perspiciatis unde omnis iste natus error sit voluptatem accusantium doloremque \
laudantium, totam rem aperiam, eaque ipsa quae ab illo inventore veritatis et quasi architecto \
beatae vitae dicta sunt explicabo.";

const ARABIC: &str = "هذا نص عربي طويل نسبيا يستخدم لعرض الاقتطاع من اليمين إلى اليسار، حيث \
يجب أن يظهر زر العرض في بداية السطر الأخير بدلا من نهايته، ويجب ألا يغطي أي حرف من الحروف \
المرئية في الفقرة مهما كان عرض الشاشة أو حجم الخط المستخدم في العرض.";

struct Screen {
    title: String,
    text: &'static str,
    collapsed_max_lines: usize,
    toggle: Option<Toggle<ToggleElement>>,
}

fn label_toggle() -> Toggle<ToggleElement> {
    Toggle::new(1, |expanded| {
        [ToggleElement::label(if expanded {
            "Show less"
        } else {
            "Show more"
        })]
    })
}

fn icon_toggle() -> Toggle<ToggleElement> {
    Toggle::new(2, |_| {
        [ToggleElement::Icon {
            width: 24.0,
            height: 24.0,
        }]
    })
}

fn screens() -> Vec<Screen> {
    let short = "Very short text";
    vec![
        Screen {
            title: format!("Not expandable (max lines = {})", short.len()),
            text: short,
            collapsed_max_lines: short.len(),
            toggle: Some(label_toggle()),
        },
        Screen {
            title: "No toggle".into(),
            text: LOREM,
            collapsed_max_lines: 3,
            toggle: None,
        },
        Screen {
            title: "Label toggle".into(),
            text: LOREM,
            collapsed_max_lines: 3,
            toggle: Some(label_toggle()),
        },
        Screen {
            title: "Icon toggle".into(),
            text: LOREM,
            collapsed_max_lines: 3,
            toggle: Some(icon_toggle()),
        },
        Screen {
            title: "Right-to-left".into(),
            text: ARABIC,
            collapsed_max_lines: 3,
            toggle: Some(label_toggle()),
        },
    ]
}

fn report(step: &str, text: &ExpandableText<(), ToggleElement>, layout: &ParleyLayout<()>) {
    let state = text.state();
    let visible = &text.text().as_str()[..state.rendered_len(text.text().len())];
    let tail_start = visible.char_indices().rev().nth(23).map_or(0, |(i, _)| i);
    let tail = &visible[tail_start..];
    println!(
        "  {step}: {:?}, {} lines, {} of {} bytes visible, ends with {tail:?}",
        text.phase(),
        layout.line_count(),
        visible.len(),
        text.text().len(),
    );
    if let Some(origin) = layout.toggle_origin() {
        println!("    toggle at ({:.1}, {:.1})", origin.x, origin.y);
    }
}

fn run(host: &mut ParleyHost<()>, screen: Screen) {
    println!("{}", screen.title);
    let config = ExpandableTextConfig::new(screen.collapsed_max_lines)
        .with_style(TextStyle::default().with_font_size(16.0));
    let mut text = ExpandableText::new(screen.text, config);
    text.set_toggle(screen.toggle);

    for step in ["collapsed", "expanded", "collapsed again"] {
        text.measure_toggle(host);
        let layout = text.layout_with(host);
        report(step, &text, &layout);
        log::info!("click");
        text.toggle_expanded();
    }
}

fn main() {
    env_logger::init();
    let mut host = ParleyHost::new(Some(WIDTH));
    for screen in screens() {
        run(&mut host, screen);
    }
}
