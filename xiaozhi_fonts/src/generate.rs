use crate::{
    command::{build_command, output_path, ExternalCommand, SymbolPayload},
    config::ToolConfig,
    encoding_table::load_encoding_table,
    error::{FontGenError, FontGenResult},
    header::generate_header,
    request::{ArtifactType, FontFamily, GenerationRequest},
    symbols::{
        icon_symbol_set, log_block_statistics, text_symbol_set, SymbolMap, EMOJI_MAPPING,
        ICON_MAPPING, PREVIEW_TEXT,
    },
};
use log::{debug, info};
use std::path::{Path, PathBuf};

/// Runs rasterizer invocations.
pub trait CommandRunner {
    /// Runs the command to completion, returning its exit code.
    ///
    /// `None` means the process ended without an exit code (e.g. it was killed by a signal).
    fn run(&self, command: &ExternalCommand) -> std::io::Result<Option<i32>>;
}

/// Builds the symbols to rasterize for a request.
pub fn symbol_payload(
    config: &ToolConfig,
    request: &GenerationRequest,
) -> FontGenResult<SymbolPayload> {
    let symbols = match request.family {
        FontFamily::Text => {
            // The table must load even when only the preview text is rendered.
            let symbols = text_symbol_set(&load_encoding_table(&config.encoding_table)?);
            if request.artifact == ArtifactType::DebugDump {
                PREVIEW_TEXT.chars().collect()
            } else {
                symbols
            }
        }
        FontFamily::Icon => icon_symbol_set(EMOJI_MAPPING, ICON_MAPPING)?,
    };
    Ok(SymbolPayload::for_family(request.family, symbols))
}

fn create_parent(path: &Path) -> FontGenResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| FontGenError::io(parent, e))?;
        }
    }
    Ok(())
}

fn write_header(path: &Path) -> FontGenResult<()> {
    let symbols = SymbolMap::merged(EMOJI_MAPPING, ICON_MAPPING)?;
    info!("Total symbols: {}", symbols.len());
    info!("Generating {}", path.display());
    std::fs::write(path, generate_header(&symbols)).map_err(|e| FontGenError::io(path, e))
}

/// Generates a single artifact, returning the path it was written to.
pub fn generate(
    config: &ToolConfig,
    request: &GenerationRequest,
    runner: &dyn CommandRunner,
) -> FontGenResult<PathBuf> {
    if !request.family.supports(request.artifact) {
        return Err(FontGenError::UnsupportedArtifact {
            family: request.family,
            artifact: request.artifact,
        });
    }

    if request.artifact == ArtifactType::Header {
        let path = output_path(request);
        write_header(&path)?;
        return Ok(path);
    }

    let payload = symbol_payload(config, request)?;
    log_block_statistics(payload.symbols());

    let command = build_command(config, request, &payload).ok_or(
        FontGenError::UnsupportedArtifact { family: request.family, artifact: request.artifact },
    )?;
    info!("Total symbols: {}", payload.symbols().len());
    info!("Generating {}", command.output.display());
    debug!("Running: {command}");

    if request.artifact == ArtifactType::BitmapSource {
        create_parent(&command.output)?;
    }
    let status = runner.run(&command).map_err(|e| FontGenError::Io {
        path: PathBuf::from(&command.program),
        source: e,
    })?;
    if status != Some(0) {
        return Err(FontGenError::ToolFailure { status });
    }
    Ok(command.output)
}

#[cfg(test)]
mod test {
    use super::*;
    use std::cell::RefCell;

    struct FakeRunner {
        status: Option<i32>,
        commands: RefCell<Vec<ExternalCommand>>,
    }
    impl CommandRunner for FakeRunner {
        fn run(&self, command: &ExternalCommand) -> std::io::Result<Option<i32>> {
            self.commands.borrow_mut().push(command.clone());
            Ok(self.status)
        }
    }

    fn runner(status: Option<i32>) -> FakeRunner {
        FakeRunner { status, commands: RefCell::new(Vec::new()) }
    }

    #[test]
    fn icon_dump_succeeds() {
        let runner = runner(Some(0));
        let request = GenerationRequest::new(FontFamily::Icon, ArtifactType::DebugDump).unwrap();
        let path = generate(&ToolConfig::default(), &request, &runner).unwrap();
        assert_eq!(path, PathBuf::from("./build"));

        let commands = runner.commands.borrow();
        assert_eq!(commands.len(), 1);
        let expected = EMOJI_MAPPING.len() + ICON_MAPPING.len();
        assert_eq!(commands[0].args.last().unwrap().to_str().unwrap().split(',').count(), expected);
    }

    #[test]
    fn tool_failure_carries_status() {
        let runner = runner(Some(3));
        let request = GenerationRequest::new(FontFamily::Icon, ArtifactType::DebugDump).unwrap();
        let err = generate(&ToolConfig::default(), &request, &runner).unwrap_err();
        assert_eq!(err.tool_status(), Some(Some(3)));

        let runner = self::runner(None);
        let err = generate(&ToolConfig::default(), &request, &runner).unwrap_err();
        assert_eq!(err.tool_status(), Some(None));
    }

    fn table_config(name: &str, contents: &str) -> ToolConfig {
        let dir = std::env::temp_dir().join(name);
        std::fs::create_dir_all(&dir).unwrap();
        let table = dir.join("GB2312.TXT");
        std::fs::write(&table, contents).unwrap();
        ToolConfig { encoding_table: table, ..ToolConfig::default() }
    }

    #[test]
    fn text_dump_uses_preview_text() {
        let config = table_config("xiaozhi_fonts_generate_preview", "0x3021\t0x554A\n");
        let runner = runner(Some(0));
        let request = GenerationRequest::new(FontFamily::Text, ArtifactType::DebugDump).unwrap();
        generate(&config, &request, &runner).unwrap();
        assert_eq!(runner.commands.borrow()[0].args.last().unwrap(), PREVIEW_TEXT);
    }

    #[test]
    fn malformed_table_aborts_before_invocation() {
        let config = table_config("xiaozhi_fonts_generate_malformed", "# header\nA1 zz\n");
        let runner = runner(Some(0));
        let request = GenerationRequest::new(FontFamily::Text, ArtifactType::BitmapSource).unwrap();
        let err = generate(&config, &request, &runner).unwrap_err();
        assert!(matches!(err, FontGenError::MalformedEncodingTable { line: 2, .. }));
        assert!(runner.commands.borrow().is_empty());
    }

    #[test]
    fn malformed_table_aborts_text_dump() {
        let config = table_config("xiaozhi_fonts_generate_malformed_dump", "A1 zz\n");
        let runner = runner(Some(0));
        let request = GenerationRequest::new(FontFamily::Text, ArtifactType::DebugDump).unwrap();
        let err = generate(&config, &request, &runner).unwrap_err();
        assert!(matches!(err, FontGenError::MalformedEncodingTable { line: 1, .. }));
        assert!(runner.commands.borrow().is_empty());
    }

    #[test]
    fn missing_table_aborts_text_dump() {
        let dir = std::env::temp_dir().join("xiaozhi_fonts_generate_no_table");
        let config =
            ToolConfig { encoding_table: dir.join("GB2312.TXT"), ..ToolConfig::default() };
        let runner = runner(Some(0));
        let request = GenerationRequest::new(FontFamily::Text, ArtifactType::DebugDump).unwrap();
        let err = generate(&config, &request, &runner).unwrap_err();
        assert!(matches!(err, FontGenError::Io { .. }));
        assert!(runner.commands.borrow().is_empty());
    }

    #[test]
    fn text_header_is_rejected() {
        let request = GenerationRequest {
            family: FontFamily::Text,
            artifact: ArtifactType::Header,
            font_size: 14,
            bpp: 4,
        };
        let runner = runner(Some(0));
        let err = generate(&ToolConfig::default(), &request, &runner).unwrap_err();
        assert!(matches!(err, FontGenError::UnsupportedArtifact { .. }));
        assert!(runner.commands.borrow().is_empty());
    }
}
