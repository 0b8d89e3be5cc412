use std::path::Path;

use crate::save::Game;

pub fn run(save: &Path, id: &str) -> Result<(), String> {
    let mut game = Game::load(save)?;
    let added = game
        .ledger
        .accept(&mut game.character, id)
        .map_err(|e| e.to_string())?;

    if added {
        game.store(save)?;
        let title = game.ledger.lookup(id).map_or(id, |q| q.title.as_str());
        println!("  Accepted quest '{title}'");
    } else {
        println!("  Quest '{id}' is already active");
    }
    Ok(())
}
