use super::*;
use crate::autojoin::store;

pub(crate) fn del_command(ctx: &Context) -> CommandResult {
    let server = current_server(ctx, "del")?;

    if ctx.parts.is_empty() {
        ctx.error("must specify at least one channel");
        return Err(Error::NoChannels);
    }

    let mut entry = store::load(&*ctx.host, &server.name);
    let mut changed = false;
    for part in ctx.parts {
        if entry.remove(part) {
            changed = true;
        } else {
            ctx.error(format!(
                "{} is not a primary channel on {}",
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
