//! TSO servlet lifecycle and MVS console calls.

use crate::core::rest::{ZosmfRest, RESOURCE_CONSOLE, RESOURCE_TSO};
use crate::domain::model::{
    ConsoleApiResponse, ConsoleResponse, TsoIssueResponse, TsoServletResponse, TsoStartParams,
};
use crate::utils::error::{Result, ZosmfError};
use reqwest::Method;

/// Polling attempts against the servlet before giving up on a prompt.
const MAX_PROMPT_POLLS: usize = 30;

async fn start_servlet(rest: &ZosmfRest, params: &TsoStartParams) -> Result<TsoServletResponse> {
    let proc = params.logon_procedure.as_deref().unwrap_or("IZUFPROC");
    let chset = params.character_set.as_deref().unwrap_or("697");
    let cpage = params.code_page.as_deref().unwrap_or("1047");
    let rows = params.rows.unwrap_or(24).to_string();
    let cols = params.columns.unwrap_or(80).to_string();
    let rsize = params.region_size.unwrap_or(4096).to_string();

    let req = rest.request(Method::POST, RESOURCE_TSO).query(&[
        ("acct", params.account.as_str()),
        ("proc", proc),
        ("chset", chset),
        ("cpage", cpage),
        ("rows", rows.as_str()),
        ("cols", cols.as_str()),
        ("rsize", rsize.as_str()),
    ]);
    rest.execute_json(req).await
}

async fn send_command(
    rest: &ZosmfRest,
    servlet_key: &str,
    command: &str,
) -> Result<TsoServletResponse> {
    let req = rest
        .request(Method::PUT, &format!("{}/{}", RESOURCE_TSO, servlet_key))
        .json(&serde_json::json!({
            "TSO RESPONSE": {"VERSION": "0100", "DATA": command}
        }));
    rest.execute_json(req).await
}

async fn poll_responses(rest: &ZosmfRest, servlet_key: &str) -> Result<TsoServletResponse> {
    let req = rest.request(Method::GET, &format!("{}/{}", RESOURCE_TSO, servlet_key));
    rest.execute_json(req).await
}

async fn stop_servlet(rest: &ZosmfRest, servlet_key: &str) -> Result<TsoServletResponse> {
    let req = rest.request(Method::DELETE, &format!("{}/{}", RESOURCE_TSO, servlet_key));
    rest.execute_json(req).await
}

/// Issue a TSO command through a fresh address space: start the servlet,
/// send the command, read responses until the servlet prompts again, then
/// stop it. The collected message lines form the command response.
pub async fn issue_tso(
    rest: &ZosmfRest,
    command: &str,
    params: &TsoStartParams,
) -> Result<TsoIssueResponse> {
    let start = start_servlet(rest, params).await?;
    let servlet_key = start
        .servlet_key
        .clone()
        .ok_or_else(|| ZosmfError::ResponseError {
            message: "TSO start returned no servletKey".to_string(),
        })?;

    let mut responses = vec![start];
    let mut command_output = Vec::new();

    let send = send_command(rest, &servlet_key, command).await?;
    command_output.extend(send.message_lines().map(|s| s.to_string()));
    let mut prompted = send.has_prompt();
    responses.push(send);

    let mut polls = 0;
    while !prompted {
        if polls >= MAX_PROMPT_POLLS {
            // Leave no orphan address space behind before bailing out.
            let _ = stop_servlet(rest, &servlet_key).await;
            return Err(ZosmfError::ResponseError {
                message: format!(
                    "TSO servlet {} did not prompt after {} reads",
                    servlet_key, MAX_PROMPT_POLLS
                ),
            });
        }
        polls += 1;

        let response = poll_responses(rest, &servlet_key).await?;
        command_output.extend(response.message_lines().map(|s| s.to_string()));
        prompted = response.has_prompt();
        responses.push(response);
    }

    stop_servlet(rest, &servlet_key).await?;

    Ok(TsoIssueResponse {
        success: true,
        command_response: Some(command_output.join("\n")),
        servlet_key: Some(servlet_key),
        zosmf_responses: responses,
    })
}

/// Issue an MVS command against the default EMCS console.
pub async fn issue_console(rest: &ZosmfRest, command: &str) -> Result<ConsoleResponse> {
    let req = rest
        .request(Method::PUT, RESOURCE_CONSOLE)
        .json(&serde_json::json!({"cmd": command}));
    let zosmf_response: ConsoleApiResponse = rest.execute_json(req).await?;

    Ok(ConsoleResponse {
        success: true,
        command_response: zosmf_response.cmd_response.clone().unwrap_or_default(),
        zosmf_response,
    })
}
