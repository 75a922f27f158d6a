mod args;
mod types;

use std::time::Instant;

use ansi_term::Colour;
use args::{InputArgs, OutputArgs};
use clap::Parser;

use packplan::{BuildPlan, Synthesizer};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Commands {
  #[clap(flatten)]
  input: InputArgs,

  #[clap(flatten)]
  output: OutputArgs,
}

fn print_plan(plan: &BuildPlan) {
  let mut left = 0;
  let mut rows = Vec::with_capacity(plan.entries.len());

  for entry in &plan.entries {
    if entry.name.len() > left {
      left = entry.name.len();
    }
    let pool = if entry.is_worker() { "worker" } else { "main" };
    rows.push((entry.name.as_str(), pool, entry.modules.len()));
  }

  let dim = Colour::White.dimmed();
  let color = Colour::Cyan;

  for (name, pool, modules) in rows {
    println!(
      "{}{:pad$} {}{} {} module(s)",
      color.paint(name),
      "",
      dim.paint(pool),
      dim.paint(" │"),
      modules,
      pad = left - name.len()
    );
  }

  println!(
    "{} {} page(s), {} copy mapping(s), mode {}",
    dim.paint("plan:"),
    plan.pages.len(),
    plan.copy_mappings.len(),
    plan.mode
  );
}

fn main() -> anyhow::Result<()> {
  let args = Commands::parse();
  let raw = std::fs::read_to_string(&args.input.config)?;
  let raw: serde_json::Value = serde_json::from_str(&raw)?;

  let start = Instant::now();
  let plan = Synthesizer::from_json(args.input.target.into(), &raw)
    .and_then(|synthesizer| synthesizer.synthesize());

  match plan {
    Ok(plan) => {
      if !args.output.silent {
        print_plan(&plan);
      }

      if let Some(out) = &args.output.out {
        let json = if args.output.pretty {
          serde_json::to_string_pretty(&plan)?
        } else {
          serde_json::to_string(&plan)?
        };
        std::fs::write(out, json)?;
      }

      let elapsed = format!("{:.2} ms", start.elapsed().as_secs_f64() * 1000.0);
      println!(
        "\n{} Synthesized in {}",
        Colour::Green.paint("✔"),
        Colour::White.bold().paint(elapsed)
      );
      Ok(())
    }
    Err(error) => {
      println!("{} {}", Colour::Red.paint("Error:"), error);
      Err(error.into())
    }
  }
}
