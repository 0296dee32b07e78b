use playlist_console::console::{ErrorPolicy, OutputFormat, RunSummary};
use playlist_console::{Command, Console, ConsoleConfig, Playlist, PlaylistError, Session};
use std::fs::{self, File};
use std::io::{BufReader, Cursor};
use tempfile::TempDir;

/// Run a script through a non-interactive console and collect the output
fn run_script(script: &str, config: ConsoleConfig) -> (RunSummary, Vec<String>) {
    let mut console = Console::new(Cursor::new(script.to_string()), Vec::new(), config);
    let summary = console.run().expect("console run failed");
    let output = String::from_utf8(console.into_output()).expect("output is not UTF-8");
    (summary, output.lines().map(str::to_string).collect())
}

#[test]
fn test_end_to_end_scenario() {
    let script = "Create 5\nPlay 3\nInsert 2 99\nDelete 1\nDelete 3\n";

    let (summary, lines) = run_script(script, ConsoleConfig::script());

    assert_eq!(summary, RunSummary { executed: 5, failed: 0 });
    assert_eq!(
        lines,
        vec![
            "1 2 3 4 5",
            "1 2 3* 4 5",
            "1 99 2 3* 4 5",
            "99 2 3* 4 5",
            "99 2 4 5",
        ]
    );
}

#[test]
fn test_errors_leave_state_unchanged() {
    let script = "Create 3\nPlay 2\nDelete 4\nInsert 0 7\nPlay 9\nCreate -2\nShuffle\n";
    let config = ConsoleConfig::script().with_error_policy(ErrorPolicy::Continue);

    let (summary, lines) = run_script(script, config);

    assert_eq!(summary, RunSummary { executed: 3, failed: 4 });
    assert_eq!(lines[0], "1 2 3");
    assert_eq!(lines[1], "1 2* 3");
    assert_eq!(lines[2], "Error: Ordinal 4 should be in range 1 to 3 inclusive");
    assert_eq!(lines[3], "Error: Ordinal 0 should be in range 1 to 4 inclusive");
    assert_eq!(lines[4], "Error: Ordinal 9 should be in range 1 to 3 inclusive");
    assert!(lines[5].starts_with("Error: Invalid argument"));

    // Shuffle keeps the playing track pinned at ordinal 2
    let shuffled: Vec<&str> = lines[6].split(' ').collect();
    assert_eq!(shuffled.len(), 3);
    assert_eq!(shuffled[1], "2*");
}

#[test]
fn test_stop_policy_ends_at_first_error() {
    let (summary, lines) = run_script("Create 2\nPlay x\nPlay 1\n", ConsoleConfig::script());

    assert_eq!(summary, RunSummary { executed: 1, failed: 1 });
    assert_eq!(lines, vec!["1 2", "Error: 'x' is not a valid integer"]);
}

#[test]
fn test_command_before_create() {
    let (_, lines) = run_script("Shuffle\n", ConsoleConfig::script());
    assert_eq!(
        lines,
        vec!["Error: Playlist does not exist. Perform a 'Create' operation first"]
    );
}

#[test]
fn test_script_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let script_path = temp_dir.path().join("commands.txt");
    fs::write(&script_path, "CREATE 4\n\nplay 4\n  insert 5 10\n").unwrap();

    let file = File::open(&script_path).unwrap();
    let config = ConsoleConfig::script().with_format(OutputFormat::Json);
    let mut console = Console::new(BufReader::new(file), Vec::new(), config);

    let summary = console.run().unwrap();
    assert_eq!(summary, RunSummary { executed: 3, failed: 0 });

    let playlist = console.session().playlist().expect("playlist was created");
    assert_eq!(playlist.tracks(), &[1, 2, 3, 4, 10]);
    assert_eq!(playlist.playing_track(), Some(4));

    let output = String::from_utf8(console.into_output()).unwrap();
    let last: serde_json::Value =
        serde_json::from_str(output.lines().last().unwrap()).unwrap();
    assert_eq!(last["tracks"], serde_json::json!([1, 2, 3, 4, 10]));
    assert_eq!(last["playing_ordinal"], serde_json::json!(4));
}

#[test]
fn test_playing_pointer_stays_in_bounds() {
    // Mixed edits around the playing track; invariant is checked after each step
    let mut session = Session::new();
    session.execute(Command::Create { size: 6 }).unwrap();

    let commands = [
        Command::Play { ordinal: 6 },
        Command::Delete { ordinal: 1 },
        Command::Insert { ordinal: 6, track_id: 50 },
        Command::Shuffle,
        Command::Delete { ordinal: 6 },
        Command::Delete { ordinal: 5 },
        Command::Play { ordinal: 1 },
        Command::Insert { ordinal: 1, track_id: 60 },
        Command::Shuffle,
        Command::Delete { ordinal: 2 },
        Command::Delete { ordinal: 1 },
    ];

    for command in commands {
        let playlist = session
            .execute(command)
            .unwrap_or_else(|err| panic!("{:?} failed: {}", command, err));
        if let Some(index) = playlist.playing_index() {
            assert!(!playlist.is_empty());
            assert!(index < playlist.len());
        }
    }
}

#[test]
fn test_oversized_create_keeps_console_running() {
    let script = "Create 2\nCreate 1000000000000000\nPlay 1\n";
    let config = ConsoleConfig::script().with_error_policy(ErrorPolicy::Continue);

    let (summary, lines) = run_script(script, config);

    assert_eq!(summary, RunSummary { executed: 2, failed: 1 });
    assert!(lines[1].starts_with("Error: Invalid argument"));
    assert_eq!(lines[2], "1* 2");
}

#[test]
fn test_duplicate_track_ids() {
    let mut playlist = Playlist::create(2).unwrap();
    playlist.insert(1, 2).unwrap();
    playlist.insert(4, 2).unwrap();
    playlist.play(3).unwrap();

    assert_eq!(playlist.tracks(), &[2, 1, 2, 2]);
    assert_eq!(playlist.render(), "2 1 2* 2");

    playlist.delete(1).unwrap();
    assert_eq!(playlist.playing_ordinal(), Some(2));
    assert_eq!(
        playlist.play(5),
        Err(PlaylistError::OutOfRange { ordinal: 5, max: 3 })
    );
}
