use crate::commands::{
    next_steps, read_uml, CmdMessage, CmdResult, GenerateOptions, GENERATE_PATH,
};
use crate::error::Result;
use crate::model::{Framework, GenerationRequest, GenerationResult};
use crate::transport::{endpoint_url, HttpReply, Transport};

pub fn build_request(uml_content: String, options: &GenerateOptions) -> GenerationRequest {
    GenerationRequest::new(
        uml_content,
        options.package_name.as_str(),
        options.output_path.as_str(),
        Framework::from_label(&options.framework),
    )
}

pub fn run<T: Transport>(
    transport: &mut T,
    base_url: &str,
    options: &GenerateOptions,
) -> Result<CmdResult> {
    let uml_content = read_uml(&options.uml_path)?;
    let request = build_request(uml_content, options);
    let body = serde_json::to_vec(&request)?;

    let reply = transport.post_json(&endpoint_url(base_url, GENERATE_PATH), body)?;
    Ok(interpret(&reply, options))
}

/// Turns the service reply into user messages.
///
/// Anything other than 200 is reported with its raw body. A 200 whose body does not
/// decode is treated as an unsuccessful generation with an empty message.
pub fn interpret(reply: &HttpReply, options: &GenerateOptions) -> CmdResult {
    let mut result = CmdResult::default().with_status(reply.status);

    if !reply.is_ok() {
        result.add_message(CmdMessage::error(format!("API Error: {}", reply.status)));
        result.add_message(CmdMessage::info(reply.body.clone()));
        return result;
    }

    let generation = GenerationResult::from_body(&reply.body);
    if generation.success {
        result.add_message(CmdMessage::success(generation.message.clone()));
        result.add_message(CmdMessage::info(format!(
            "📊 Generated {} classes",
            generation.class_count
        )));

        result.add_message(CmdMessage::info(""));
        result.add_message(CmdMessage::info("🎯 Next Steps:"));
        for step in next_steps::for_label(&options.framework, &options.output_path) {
            result.add_message(CmdMessage::info(format!("  {}", step)));
        }
    } else {
        result.add_message(CmdMessage::error(format!(
            "Generation failed: {}",
            generation.message
        )));
    }

    result.with_generation(generation)
}
