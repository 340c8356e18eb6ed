use super::*;
use crate::autojoin::store;

pub(crate) fn join_command(ctx: &Context) -> CommandResult {
    if wants_all(ctx) {
        for server in ctx.host.servers() {
            if !server.connected {
                debug!("skipping {}: not connected", server.name);
                continue;
            }
            join_primary(ctx, &server);
        }
        return Ok(());
    }

    // connection state is the host's problem on the current server
    let server = current_server(ctx, "join")?;
    join_primary(ctx, &server);
    Ok(())
}

fn join_primary(ctx: &Context, server: &Server) {
    let entry = store::load(&*ctx.host, &server.name);
    for channel in entry.iter() {
        ctx.request(Request::Join {
            buffer: server.buffer,
            channel: channel.to_owned(),
        });
    }
}
