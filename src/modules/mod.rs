pub mod moderation;

use crate::{Data, Error};

pub struct Module {
    pub id: &'static str,
    pub commands: Vec<poise::Command<Data, Error>>,
}

pub fn get_modules() -> Vec<Module> {
    vec![moderation::module()]
}

pub fn commands() -> Vec<poise::Command<Data, Error>> {
    let mut all_commands = vec![];

    for mut module in get_modules() {
        for command in &mut module.commands {
            command.category = Some(module.id.into());
        }
        all_commands.extend(module.commands);
    }

    all_commands
}
