use super::*;
use crate::autojoin::store;

pub(crate) fn add_command(ctx: &Context) -> CommandResult {
    let server = current_server(ctx, "add")?;

    if ctx.parts.is_empty() {
        ctx.error("must specify at least one channel");
        return Err(Error::NoChannels);
    }

    // every name has to pass before any of them is applied
    for part in ctx.parts {
        if !ctx.host.is_channel(part) {
            ctx.error(format!("{} is not a valid channel name", part));
            return Err(Error::InvalidChannel(part.to_string()));
        }
    }

    let mut entry = store::load(&*ctx.host, &server.name);
    let mut changed = false;
    for part in ctx.parts {
        if entry.add(part) {
            changed = true;
        } else {
            ctx.error(format!(
                "{} is already a primary channel on {}",
                part, server.name
            ));
        }
    }

    if !changed {
        return Err(Error::NothingChanged);
    }

    store::save(&*ctx.host, &server.name, &entry);
    ctx.print(
        Target::Buffer(ctx.buffer),
        Output::plain(format!(
            "primary channels for {}: {}",
            server.name,
            entry.display()
        )),
    );
    Ok(())
}
