pub mod commands;

use crate::modules::Module;

pub fn module() -> Module {
    Module {
        id: "moderation",
        commands: vec![
            commands::ban(),
            commands::kick(),
            commands::mute(),
            commands::unmute(),
            commands::addrole(),
            commands::removerole(),
        ],
    }
}
