use common::log;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tokio::net::tcp::OwnedWriteHalf;
use tokio::sync::mpsc;

#[derive(Debug, Clone, Copy)]
pub struct ScoreReport {
    pub score: u32,
}

fn score_line(player_name: &str, score: u32) -> String {
    format!("SCORE {} {}", player_name, score)
}

async fn send_report(write_half: &mut OwnedWriteHalf, player_name: &str, report: ScoreReport) {
    let line = score_line(player_name, report.score) + "\n";
    match write_half.write_all(line.as_bytes()).await {
        Ok(()) => log!("Reported score {} for {}", report.score, player_name),
        Err(err) => log!("Failed to report score: {}", err),
    }
}

pub async fn run_score_reporter(
    address: String,
    player_name: String,
    mut report_rx: mpsc::UnboundedReceiver<ScoreReport>,
) {
    let stream = match TcpStream::connect(&address).await {
        Ok(stream) => stream,
        Err(err) => {
            log!("Score server {} unreachable: {}", address, err);
            while let Some(report) = report_rx.recv().await {
                log!(
                    "Dropping score report for {} ({} points): not connected",
                    player_name,
                    report.score
                );
            }
            return;
        }
    };
    log!("Connected to score server at {}", address);

    let (read_half, mut write_half) = stream.into_split();
    let mut lines = BufReader::new(read_half).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                match line {
                    Ok(Some(line)) => log!("Server: {}", line),
                    Ok(None) => {
                        log!("Score server closed the connection");
                        break;
                    }
                    Err(err) => {
                        log!("Error reading from score server: {}", err);
                        break;
                    }
                }
            }
            report = report_rx.recv() => {
                match report {
                    Some(report) => send_report(&mut write_half, &player_name, report).await,
                    None => return,
                }
            }
        }
    }

    // Feedback stream is gone; report lines are still written best-effort.
    while let Some(report) = report_rx.recv().await {
        send_report(&mut write_half, &player_name, report).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_line_format() {
        assert_eq!(score_line("alice", 12), "SCORE alice 12");
        assert_eq!(score_line("bob", 0), "SCORE bob 0");
    }
}
