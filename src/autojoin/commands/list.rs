use super::*;
use crate::autojoin::store;

pub(crate) fn list_command(ctx: &Context) -> CommandResult {
    if wants_all(ctx) {
        let mut seen = false;
        for server in ctx.host.servers() {
            let entry = store::load(&*ctx.host, &server.name);
            for channel in entry.iter() {
                ctx.print(
                    Target::Core,
                    Output::plain(format!("{}: {}", server.name, channel)),
                );
                seen = true;
            }
        }
        if !seen {
            ctx.print(Target::Core, "(none)");
        }
        return Ok(());
    }

    let server = current_server(ctx, "list")?;
    let entry = store::load(&*ctx.host, &server.name);
    if entry.is_empty() {
        ctx.print(Target::Buffer(ctx.buffer), "(none)");
    } else {
        for channel in entry.iter() {
            ctx.print(Target::Buffer(ctx.buffer), channel);
        }
    }
    Ok(())
}
