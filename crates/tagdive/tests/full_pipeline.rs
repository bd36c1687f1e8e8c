use tagdive_chat::{run_tag, TagStatus, TextCleaner};
use tagdive_core::{
    read_keywords, read_questions, read_summary, write_summary, PipelineConfig, TagCountRow,
};
use tagdive_summary::{extract_summary, find_export};

fn reference_config() -> PipelineConfig {
    PipelineConfig::default()
}

#[test]
fn test_summary_stage_end_to_end() {
    let temp = tempfile::TempDir::new().unwrap();
    // Export lives in a dated subfolder, with metadata rows above the table
    let sub = temp.path().join("Aug-Sep 2025");
    std::fs::create_dir_all(&sub).unwrap();
    std::fs::write(
        sub.join("custom_chart_2025-08-20_2025-09-16.csv"),
        "Conversation tag export,2025-09-16\n\n\
         Conversation Tag,New Conversations\n\
         Free,10\nMy Account,7\nNot tagged,3\nManage Classes,12\n",
    )
    .unwrap();

    let config = reference_config();
    let export = find_export(temp.path(), &config.export_file_name).unwrap();
    let rows = extract_summary(&export, &config).unwrap();

    assert_eq!(
        rows,
        vec![
            TagCountRow {
                tag: "Manage Classes".to_string(),
                count: 12
            },
            TagCountRow {
                tag: "My Account".to_string(),
                count: 7
            },
        ]
    );

    write_summary(temp.path(), &rows).unwrap();
    let read_back = read_summary(temp.path()).unwrap();
    assert_eq!(read_back, rows);
}

#[test]
fn test_deep_dive_stage_end_to_end() {
    let temp = tempfile::TempDir::new().unwrap();
    let dir = temp.path().join("My Account Aug-Sep16");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(
        dir.join("conversation1.txt"),
        "Conversation started on Monday\n\
         9:05 AM | Jane Doe: How do I reset my password?\n\
         9:06 AM | Nikki: Happy to help with that.\n\
         9:07 AM | Jane Doe: the reset link is broken?\n\
         and this continuation line is dropped\n",
    )
    .unwrap();
    std::fs::write(
        dir.join("conversation2.txt"),
        "10:30 AM | Carlos Ruiz: can I reset passwords for my whole class?\n\
         10:31 AM | The Quill Team: Yes, from the roster page.\n\
         10:32 AM | Carlos Ruiz: perfect, thank you\n",
    )
    .unwrap();

    let config = reference_config();
    let cleaner = TextCleaner::from_config(&config);
    let outcome = run_tag(
        temp.path(),
        "My Account",
        "My Account Aug\u{2013}Sep16",
        &config,
        &cleaner,
    )
    .unwrap();

    assert_eq!(
        outcome.status,
        TagStatus::Written {
            questions: 3,
            keywords: 6,
        }
    );

    let questions = read_questions(temp.path(), "My Account").unwrap();
    assert_eq!(
        questions,
        vec![
            "How do I reset my password?".to_string(),
            "the reset link is broken?".to_string(),
            "can I reset passwords for my whole class?".to_string(),
        ]
    );

    let keywords = read_keywords(temp.path(), "My Account").unwrap();
    assert_eq!(keywords[0], ("reset".to_string(), 3));
    // Non-increasing counts, at most 20 rows
    assert!(keywords.len() <= 20);
    assert!(keywords.windows(2).all(|w| w[0].1 >= w[1].1));
}

#[test]
fn test_single_question_line_flows_to_both_artifacts() {
    let temp = tempfile::TempDir::new().unwrap();
    let dir = temp.path().join("My Account Aug-Sep16");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(
        dir.join("chat.txt"),
        "9:05 AM | Jane Doe: How do I reset my password?\n",
    )
    .unwrap();

    let config = reference_config();
    let cleaner = TextCleaner::from_config(&config);
    run_tag(
        temp.path(),
        "My Account",
        "My Account Aug\u{2013}Sep16",
        &config,
        &cleaner,
    )
    .unwrap();

    let questions = read_questions(temp.path(), "My Account").unwrap();
    assert_eq!(questions, vec!["How do I reset my password?".to_string()]);

    let keywords = read_keywords(temp.path(), "My Account").unwrap();
    let words: Vec<&str> = keywords.iter().map(|(w, _)| w.as_str()).collect();
    assert_eq!(words, vec!["reset", "password"]);
}

#[test]
fn test_outputs_readable_by_csv_consumers() {
    // The dashboard reads these files with a stock CSV parser; make sure
    // quoting survives a round trip through one
    let temp = tempfile::TempDir::new().unwrap();
    let dir = temp.path().join("My Account Aug-Sep16");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(
        dir.join("chat.txt"),
        "9:05 AM | Jane Doe: Hi, my \"class code\" stopped working, can you fix it?\n",
    )
    .unwrap();

    let config = reference_config();
    let cleaner = TextCleaner::from_config(&config);
    run_tag(
        temp.path(),
        "My Account",
        "My Account Aug\u{2013}Sep16",
        &config,
        &cleaner,
    )
    .unwrap();

    let mut rdr =
        csv::Reader::from_path(temp.path().join("My_Account_user_questions.csv")).unwrap();
    let headers = rdr.headers().unwrap().clone();
    assert_eq!(headers.iter().collect::<Vec<_>>(), vec!["user_message"]);

    let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 1);
    assert_eq!(
        rows[0].get(0).unwrap(),
        "Hi, my \"class code\" stopped working, can you fix it?"
    );
}
