use std::io::{stdout, Write};
use std::sync::Arc;

use crossterm::{terminal, ExecutableCommand, Result};

use crate::utilities::statistics::RoundSummary;

use super::elevator::Elevator;

pub fn print_summary(epoch: u32, summary: &RoundSummary, elevators: &[Arc<Elevator>]) -> Result<()> {
    let mut stdout = stdout();
    write_summary(&mut stdout, epoch, summary, elevators)?;
    stdout.flush()?;
    Ok(())
}

fn write_summary<W: Write>(out: &mut W, epoch: u32, summary: &RoundSummary, elevators: &[Arc<Elevator>]) -> Result<()> {
    out.execute(terminal::Clear(terminal::ClearType::FromCursorDown))?;

    let average_wait = summary
        .average_wait()
        .map(|wait| format!("{}ms", wait.as_millis()))
        .unwrap_or_else(|| String::from("-"));

    writeln!(out, "+-------------------------------------------+")?;
    writeln!(out, "| ROUND {0:<35} |", epoch)?;
    writeln!(out, "+---------------------+---------------------+")?;
    writeln!(out, "| {0:<19} | {1:<19} |", "RIDERS BOARDED", summary.boarded)?;
    writeln!(out, "| {0:<19} | {1:<19} |", "RIDERS DELIVERED", summary.delivered)?;
    writeln!(out, "| {0:<19} | {1:<19} |", "AVERAGE WAIT", average_wait)?;
    writeln!(out, "| {0:<19} | {1:<19} |", "TOTAL DISTANCE", summary.total_distance)?;
    writeln!(out, "| {0:<19} | {1:<19} |", "ELEVATORS RETIRED", summary.retired)?;
    writeln!(out, "+---------------------+---------------------+\n")?;

    writeln!(out, "+------------+------------+------------+------------+")?;
    writeln!(out, "| {0:<10} | {1:<10} | {2:<10} | {3:<10} |", "ELEVATOR", "FLOOR", "STATUS", "LOAD")?;
    writeln!(out, "+------------+------------+------------+------------+")?;
    for elevator in elevators {
        writeln!(
            out,
            "| {0:<10} | {1:<10} | {2:<10} | {3:<10} |",
            elevator.id(),
            elevator.curr_floor(),
            elevator.status().as_string(),
            format!("{}/{}", elevator.load(), elevator.max_load()),
        )?;
    }
    writeln!(out, "+------------+------------+------------+------------+\n")?;
    Ok(())
}
