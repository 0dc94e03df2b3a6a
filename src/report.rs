//! Plain-text rendering of a schedule.
//!
//! Each policy section has three parts:
//!
//! ```text
//! ----------------------------------------------
//!            First-come, first-serve
//! ----------------------------------------------
//! Gantt schedule
//! |   1   |   2   |   3   |
//! 0	5	8	10
//!
//! Schedule table
//! ID	Priority	Burst	Arrival	Wait	Turnaround	Exit
//! 1	0	5	0	0	5	5
//! ...
//! Average wait: 3.33
//! Average turnaround: 6.67
//! Throughput: 0.30/t
//! ```
//!
//! Idle gaps are not drawn; they show up as a jump between a span's stop
//! and the next start.

use std::io::Write;

use crate::error::{Result, SimError};
use crate::models::{Schedule, Timeline};
use crate::scheduler::Summary;

const CELL_WIDTH: usize = 8;

/// Writes one policy section.
pub fn render<W: Write>(w: &mut W, title: &str, schedule: &Schedule) -> Result<()> {
    write_title(w, title)?;
    write_gantt(w, &schedule.timeline)?;
    writeln!(w)?;
    write_table(w, schedule)?;
    writeln!(w)?;
    Ok(())
}

/// Renders a section into a string.
pub fn render_to_string(title: &str, schedule: &Schedule) -> Result<String> {
    let mut buf = Vec::new();
    render(&mut buf, title, schedule)?;
    String::from_utf8(buf).map_err(|e| SimError::Io(std::io::Error::other(e)))
}

fn write_title<W: Write>(w: &mut W, title: &str) -> Result<()> {
    let len = title.chars().count();
    let rule = "-".repeat(2 * len);
    writeln!(w, "{rule}")?;
    writeln!(w, "{}{title}", " ".repeat(len / 2))?;
    writeln!(w, "{rule}")?;
    Ok(())
}

fn write_gantt<W: Write>(w: &mut W, timeline: &Timeline) -> Result<()> {
    writeln!(w, "Gantt schedule")?;

    let mut bar = String::from("|");
    for slice in timeline {
        let pid = slice.pid.to_string();
        let pad = " ".repeat(CELL_WIDTH.saturating_sub(pid.len()) / 2);
        bar.push_str(&pad);
        bar.push_str(&pid);
        bar.push_str(&pad);
        bar.push('|');
    }
    writeln!(w, "{bar}")?;

    let mut marks: Vec<String> = timeline.iter().map(|s| s.start.to_string()).collect();
    if !timeline.is_empty() {
        marks.push(timeline.end().to_string());
    }
    writeln!(w, "{}", marks.join("\t"))?;
    Ok(())
}

fn write_table<W: Write>(w: &mut W, schedule: &Schedule) -> Result<()> {
    writeln!(w, "Schedule table")?;
    writeln!(w, "ID\tPriority\tBurst\tArrival\tWait\tTurnaround\tExit")?;
    for row in &schedule.rows {
        writeln!(
            w,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}",
            row.pid, row.priority, row.burst, row.arrival, row.waiting, row.turnaround, row.completion
        )?;
    }

    match Summary::calculate(schedule) {
        Ok(summary) => {
            writeln!(w, "Average wait: {:.2}", summary.average_waiting)?;
            writeln!(w, "Average turnaround: {:.2}", summary.average_turnaround)?;
            writeln!(w, "Throughput: {:.2}/t", summary.throughput)?;
        }
        Err(SimError::EmptyInput) => writeln!(w, "no processes")?,
        Err(e) => return Err(e),
    }
    Ok(())
}
