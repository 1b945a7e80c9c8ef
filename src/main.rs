// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Liaison-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Liaison Sankey and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Liaison Sankey CLI entrypoint.
//!
//! Loads a snapshot, builds the panels for the requested filters and prints them as text (or as
//! renderer figure JSON). `--click` feeds one click event through the viewer and prints the
//! resulting detail view.

use std::error::Error;

use liaison_sankey::model::{DirectionFilter, MeetingFilter, SelectionState};
use liaison_sankey::render::plotly::Figure;
use liaison_sankey::render::render_direction_totals;
use liaison_sankey::store::SnapshotFile;
use liaison_sankey::ui::{
    demo_snapshot, ClickEvent, ClickOutcome, FigureSurface, TextSurface, TracingClickObserver,
    Viewer, ViewerOptions,
};
use tracing_subscriber::EnvFilter;

const SNAPSHOT_ENV: &str = "LIAISON_SANKEY_SNAPSHOT";
const DEFAULT_SNAPSHOT: &str = "liaison_data.js";

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [<snapshot>] [--dir all|in|out] [--meeting <id>] [--split] [--json]\n  {program} [<snapshot>] [--dir all|in|out] [--meeting <id>] [--split] --click <event-json>\n  {program} [<snapshot>] --check\n  {program} --schema\n  {program} --demo [...]\n\nIf <snapshot> is omitted, ${SNAPSHOT_ENV} is used, then ./{DEFAULT_SNAPSHOT}.\nSnapshots are JSON or a `window.LIAISON_DATA = {{...}};` data script.\n--demo uses a built-in two-meeting snapshot and cannot be combined with <snapshot>.\n--check prints per-meeting direction sums, then verifies per-meeting records against totals.\n--json, --click, --check and --schema are mutually exclusive.\n\nLogging goes to stderr; set RUST_LOG (default `warn`)."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    snapshot: Option<String>,
    direction: Option<DirectionFilter>,
    meeting: Option<MeetingFilter>,
    split: bool,
    json: bool,
    click: Option<String>,
    check: bool,
    schema: bool,
    demo: bool,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--dir" => {
                if options.direction.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                options.direction = Some(raw.parse().map_err(|_| ())?);
            }
            "--meeting" => {
                if options.meeting.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                options.meeting = Some(MeetingFilter::parse(&raw).ok_or(())?);
            }
            "--split" => {
                if options.split {
                    return Err(());
                }
                options.split = true;
            }
            "--json" => {
                if options.json {
                    return Err(());
                }
                options.json = true;
            }
            "--click" => {
                if options.click.is_some() {
                    return Err(());
                }
                options.click = Some(args.next().ok_or(())?);
            }
            "--check" => {
                if options.check {
                    return Err(());
                }
                options.check = true;
            }
            "--schema" => {
                if options.schema {
                    return Err(());
                }
                options.schema = true;
            }
            "--demo" => {
                if options.demo {
                    return Err(());
                }
                options.demo = true;
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.snapshot.is_some() {
                    return Err(());
                }
                options.snapshot = Some(arg);
            }
        }
    }

    if options.demo && options.snapshot.is_some() {
        return Err(());
    }

    let modes = [
        options.json,
        options.click.is_some(),
        options.check,
        options.schema,
    ];
    if modes.iter().filter(|&&on| on).count() > 1 {
        return Err(());
    }

    Ok(options)
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "liaison-sankey".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        init_logging();

        if options.schema {
            let schema = schemars::schema_for!(Figure);
            println!("{}", serde_json::to_string_pretty(&schema)?);
            return Ok(());
        }

        let snapshot = if options.demo {
            demo_snapshot()
        } else {
            let path = options
                .snapshot
                .or_else(|| std::env::var(SNAPSHOT_ENV).ok())
                .unwrap_or_else(|| DEFAULT_SNAPSHOT.to_owned());
            SnapshotFile::new(path).load()?
        };

        if options.check {
            println!("{}", render_direction_totals(&snapshot));
            let mismatches = snapshot.check_totals();
            if mismatches.is_empty() {
                println!("totals ok ({} total edges)", snapshot.edges_total.len());
                return Ok(());
            }
            for mismatch in &mismatches {
                println!("{mismatch}");
            }
            return Err(format!("{} edge keys do not add up to totals", mismatches.len()).into());
        }

        let meeting = options.meeting.unwrap_or_default();
        if let MeetingFilter::Meeting(id) = &meeting {
            if !snapshot.has_meeting(id) {
                tracing::warn!(meeting = %id, "meeting not listed in snapshot");
            }
        }
        let selection = SelectionState::new(
            options.direction.unwrap_or_default(),
            meeting,
            options.split,
        );
        let mut viewer = Viewer::with_selection(snapshot, ViewerOptions::default(), selection)
            .with_observer(Box::new(TracingClickObserver));

        if options.json {
            let mut surface = FigureSurface::default();
            let ticket = viewer.render(&mut surface);
            viewer.draw_completed(ticket);
            if let Some(figure) = surface.figure() {
                println!("{}", serde_json::to_string_pretty(figure)?);
            }
            return Ok(());
        }

        let mut surface = TextSurface::default();
        let ticket = viewer.render(&mut surface);
        viewer.draw_completed(ticket);

        let Some(raw_event) = options.click else {
            println!("{}", surface.text());
            return Ok(());
        };

        let event = ClickEvent::from_value(serde_json::from_str(&raw_event)?);
        match viewer.handle_click(&event) {
            ClickOutcome::Shown(_) => {
                if let Some(body) = viewer.detail_view().body_text() {
                    println!("{body}");
                }
            }
            ClickOutcome::Unresolved | ClickOutcome::Ignored => {
                println!("(click did not resolve to a link)");
            }
        }

        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("liaison-sankey: {err}");
        std::process::exit(1);
    }
}
