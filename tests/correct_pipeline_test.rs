use std::fs;

use stripfix::batch::{self, BatchOptions};
use stripfix::error::Result;
use stripfix::spelling::{
    BuiltinDictionary, CheckerConfig, CorrectionTable, PanelCorrector, SpellChecker, ValidWordSet,
};
use stripfix::table::{PanelTable, wordlist};
use tempfile::tempdir;

#[test]
fn test_correct_pipeline_end_to_end() -> Result<()> {
    let dir = tempdir()?;
    let input_path = dir.path().join("strips.csv");
    let output_path = dir.path().join("strips_corrected.csv");

    // 1. Write the curated word lists the way a user would maintain them.
    fs::write(
        dir.path().join("valid_spell_list.txt"),
        "# curated interjections\naaugh\n\nsigh\n",
    )?;
    fs::write(
        dir.path().join("character_names.txt"),
        "Snoopy\nCharlie\nBrown\n",
    )?;

    // 2. Build and write the input table.
    let mut table = PanelTable::new(["strip_id", "title", "text_by_panels"]);
    table.push_record([
        "1962-04-07",
        "baseball",
        r#"["CHarlie is going home", "the dog is happy"]"#,
    ])?;
    table.push_record([
        "1962-04-08",
        "supper",
        r#"["Snooy has a blanet", "chompSnoopy"]"#,
    ])?;
    table.write(&input_path)?;

    // 3. Re-read and correct it.
    let mut table = PanelTable::read(&input_path)?;
    let corrector = build_corrector(dir.path())?;
    let summary = batch::correct_table(&mut table, &corrector, &BatchOptions::default(), None)?;

    assert_eq!(summary.record_count, 2);
    assert_eq!(summary.panel_count, 4);
    assert_eq!(summary.changed_panels, 3);

    table.write(&output_path)?;

    // 4. Verify the written output preserves the input and adds one column.
    let reread = PanelTable::read(&output_path)?;
    assert_eq!(
        reread.columns(),
        [
            "strip_id",
            "title",
            "text_by_panels",
            "text_spell_corrected"
        ]
    );
    assert_eq!(reread.column("strip_id")?, ["1962-04-07", "1962-04-08"]);
    assert_eq!(reread.column("title")?, ["baseball", "supper"]);
    assert_eq!(
        reread.panel_texts("text_by_panels")?,
        vec![
            vec!["CHarlie is going home", "the dog is happy"],
            vec!["Snooy has a blanet", "chompSnoopy"],
        ]
    );
    assert_eq!(
        reread.panel_texts("text_spell_corrected")?,
        vec![
            vec!["charlie is going home", "the dog is happy"],
            vec!["snoopy has a blanket", "chomp snoopy"],
        ]
    );

    Ok(())
}

#[test]
fn test_rerun_replaces_corrected_column() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("strips.csv");

    fs::write(dir.path().join("valid_spell_list.txt"), "aaugh\n")?;
    fs::write(dir.path().join("character_names.txt"), "Snoopy\n")?;

    let mut table = PanelTable::new(["strip_id", "text_by_panels"]);
    table.push_record(["1962-04-07", r#"["the dog is gong home"]"#])?;
    table.write(&path)?;

    let corrector = build_corrector(dir.path())?;

    // First run writes the corrected column.
    let mut table = PanelTable::read(&path)?;
    batch::correct_table(&mut table, &corrector, &BatchOptions::default(), None)?;
    table.write(&path)?;

    // A second run over the written output must replace the column in
    // place, not stack another one next to it.
    let mut table = PanelTable::read(&path)?;
    batch::correct_table(&mut table, &corrector, &BatchOptions::default(), None)?;
    table.write(&path)?;

    let reread = PanelTable::read(&path)?;
    assert_eq!(
        reread.columns(),
        ["strip_id", "text_by_panels", "text_spell_corrected"]
    );
    assert_eq!(
        reread.panel_texts("text_spell_corrected")?,
        vec![vec!["the dog is going home"]]
    );

    Ok(())
}

#[test]
fn test_accepted_words_survive_both_passes() -> Result<()> {
    let dir = tempdir()?;

    fs::write(dir.path().join("valid_spell_list.txt"), "aaugh\nsigh\n")?;
    fs::write(dir.path().join("character_names.txt"), "Snoopy\n")?;

    // Interjections and names are nonsense to the base dictionary; the
    // curated lists are what keeps them from being "corrected" away.
    let corrector = build_corrector(dir.path())?;
    assert_eq!(corrector.correct("AAUGH! SIGH.")?, "aaugh! sigh.");
    assert_eq!(corrector.correct("Snoopy was happy")?, "snoopy was happy");

    Ok(())
}

fn build_corrector(dir: &std::path::Path) -> Result<PanelCorrector> {
    let accepted = wordlist::read_words(dir.join("valid_spell_list.txt"))?;
    let names = wordlist::read_words(dir.join("character_names.txt"))?;
    let valid_words = ValidWordSet::from_words(accepted.into_iter().chain(names));
    let checker = SpellChecker::new(
        BuiltinDictionary::english(),
        &valid_words,
        CheckerConfig::default(),
    );
    Ok(PanelCorrector::new(CorrectionTable::builtin()?, checker))
}
