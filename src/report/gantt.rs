//! ASCII Gantt chart rendering.
//!
//! Draws a time ruler over a bar of `|`-separated process blocks, three
//! character columns per time unit. Process ids are centered in their
//! blocks with `-` padding; idle gaps are rendered as plain dashes.

use crate::models::Timeline;

/// Character columns per simulated time unit.
const UNIT_WIDTH: usize = 3;

/// Renders a timeline as a two-line chart (ruler + bar).
pub fn render(timeline: &Timeline) -> String {
    if timeline.is_empty() {
        return "No execution log to display.".to_string();
    }

    let blocks = timeline.sorted();
    let total_time = blocks.last().map(|b| b.end).unwrap_or(0);

    let mut ruler = String::from("Time: ");
    for t in 0..=total_time {
        ruler.push_str(&format!("{t:<UNIT_WIDTH$}"));
    }

    let mut bar = String::from("|");
    let mut current = 0i64;
    for block in &blocks {
        if block.start > current {
            let gap = (block.start - current) as usize * UNIT_WIDTH;
            bar.push_str(&"-".repeat(gap));
            bar.push('|');
        }

        let width = block.duration() as usize * UNIT_WIDTH;
        let padding = width.saturating_sub(block.pid.len());
        let left = padding / 2;
        let right = padding - left;
        bar.push_str(&"-".repeat(left));
        bar.push_str(&block.pid);
        bar.push_str(&"-".repeat(right));
        bar.push('|');
        current = block.end;
    }

    format!("Gantt Chart:\n{ruler}\n{bar}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExecutionBlock;

    #[test]
    fn test_render_single_block() {
        let timeline: Timeline = [ExecutionBlock::new(0, 2, "P1")].into_iter().collect();
        let rendered = render(&timeline);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "Gantt Chart:");
        assert_eq!(lines[1], "Time: 0  1  2  ");
        // 2 units = 6 columns; "P1" centered leaves 2 dashes each side.
        assert_eq!(lines[2], "|--P1--|");
    }

    #[test]
    fn test_render_idle_gap_as_dashes() {
        let timeline: Timeline = [
            ExecutionBlock::new(0, 1, "P1"),
            ExecutionBlock::new(3, 4, "P2"),
        ]
        .into_iter()
        .collect();
        let rendered = render(&timeline);
        let bar = rendered.lines().last().unwrap();
        assert_eq!(bar, "|P1-|------|P2-|");
    }

    #[test]
    fn test_render_sorts_blocks() {
        let timeline: Timeline = [
            ExecutionBlock::new(2, 4, "P2"),
            ExecutionBlock::new(0, 2, "P1"),
        ]
        .into_iter()
        .collect();
        let bar = render(&timeline);
        let p1 = bar.find("P1").unwrap();
        let p2 = bar.find("P2").unwrap();
        assert!(p1 < p2);
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render(&Timeline::new()), "No execution log to display.");
    }

    #[test]
    fn test_render_pid_wider_than_block() {
        // A one-unit block cannot fit a 4-char pid; it overflows rather
        // than truncating.
        let timeline: Timeline = [ExecutionBlock::new(0, 1, "LONG")].into_iter().collect();
        let bar = render(&timeline);
        assert!(bar.contains("LONG"));
    }
}
