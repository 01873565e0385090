use focusloop_core::ReactionEngine;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let engine = ReactionEngine::new();
    for rule in engine.rules() {
        let guard = if rule.requires_enabled {
            "requires enabled"
        } else {
            "always"
        };
        println!("{:<32} [{guard}]", rule.name);
    }
    Ok(())
}
