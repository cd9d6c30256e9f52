//! Headless editing session
//!
//! Loads generated content, applies the edits a writer would make through the
//! block editor, and prints every HTML update pushed to the hosting page.

use recipe_block_converter::block::{BlockKind, BlockType};
use recipe_block_converter::editor::{BlockEditor, MoveDirection};
use recipe_block_converter::error::EditError;

fn main() -> Result<(), EditError> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let mut editor = BlockEditor::new("");
    let mut updates = 0usize;
    editor.on_change(move |html| {
        updates += 1;
        println!("--- update #{} ---\n{}\n", updates, html);
    });

    editor.load(
        "<h1>Overnight Oats</h1>\
         <p>Breakfast that makes itself.</p>\
         <ul><li>50g oats</li><li>100ml milk</li></ul>",
    );

    let intro = editor.blocks()[1].id.clone();
    let photo = editor.insert_block(0, BlockType::Image)?;
    editor.update_kind(
        &photo,
        BlockKind::Image {
            src: String::new(),
            alt: "Jar of overnight oats".to_string(),
            is_placeholder: true,
        },
    )?;

    let heading = editor.insert_block(2, BlockType::Heading)?;
    editor.update_content(&heading, "Ingredients")?;

    // No-op edit: the document is unchanged, so no update is printed
    editor.update_content(&intro, "Breakfast that makes itself.")?;

    editor.move_block(&photo, MoveDirection::Down)?;

    match editor.delete_block(&"missing".into()) {
        Ok(_) => log::warn!("unexpected delete of unknown block"),
        Err(err) => log::info!("rejected edit: {}", err),
    }

    log::info!(
        "final document: {} blocks, {} words, etag {}",
        editor.len(),
        editor.word_count(),
        editor.fingerprint().etag()
    );

    Ok(())
}
