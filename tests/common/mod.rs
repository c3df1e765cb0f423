use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};

#[allow(dead_code)]
pub fn inventory_json() -> String {
    serde_json::json!({
        "brand_guidelines": {
            "clear_space": "Equal to 1/4 the height of the 'Q' in the logo",
            "minimum_size": "70px height for digital applications",
            "primary_green": "#229529"
        },
        "logos": {
            "1color-light": {
                "filename": "CIQ-Logo-1color-light.png",
                "url": "https://assets.example/ciq/1color-light.png",
                "description": "One color logo for light backgrounds",
                "guidance": "Clean and professional - works in most contexts"
            },
            "1color-dark": {
                "filename": "CIQ-Logo-1color-dark.png",
                "url": "https://assets.example/ciq/1color-dark.png"
            },
            "2color-light": {
                "filename": "CIQ-Logo-2color-light.png",
                "url": "https://assets.example/ciq/2color-light.png",
                "description": "Two color logo for light backgrounds"
            },
            "2color-dark": {
                "filename": "CIQ-Logo-2color-dark.png",
                "url": "https://assets.example/ciq/2color-dark.png"
            },
            "green-light": {
                "filename": "CIQ-Logo-green-light.png",
                "url": "https://assets.example/ciq/green-light.png"
            },
            "green-dark": {
                "filename": "CIQ-Logo-green-dark.png",
                "url": "https://assets.example/ciq/green-dark.png"
            }
        },
        "fuzzball_logos": {
            "icon-blk-medium": {
                "filename": "Fuzzball-Icon_blk_M.png",
                "url": "https://assets.example/fuzzball/icon-blk.png"
            },
            "icon-wht-medium": {
                "filename": "Fuzzball-Icon_wht_M.png",
                "url": "https://assets.example/fuzzball/icon-wht.png"
            },
            "horizontal-blk-medium": {
                "filename": "Fuzzball_logo_h-blk_M.png",
                "url": "https://assets.example/fuzzball/h-blk.png",
                "description": "Fuzzball horizontal lockup for light backgrounds"
            },
            "horizontal-wht-medium": {
                "filename": "Fuzzball_logo_h-wht_M.png",
                "url": "https://assets.example/fuzzball/h-wht.png"
            },
            "vertical-blk-medium": {
                "filename": "Fuzzball_logo_v-blk_M.png",
                "url": "https://assets.example/fuzzball/v-blk.png"
            },
            "vertical-wht-medium": {
                "filename": "Fuzzball_logo_v-wht_M.png",
                "url": "https://assets.example/fuzzball/v-wht.png"
            }
        },
        "warewulf-pro_logos": {
            "horizontal-blk-medium": {
                "filename": "Warewulf_logo_h-blk_M.png",
                "url": "https://assets.example/warewulf/h-blk.png"
            },
            "icon-wht-medium": {
                "filename": "Warewulf-Icon_wht_M.png",
                "url": "https://assets.example/warewulf/icon-wht.png"
            }
        }
    })
    .to_string()
}

#[allow(dead_code)]
pub fn write_inventory(dir: &Path) -> PathBuf {
    let path = dir.join("inventory.json");
    std::fs::write(&path, inventory_json()).expect("write inventory");
    path
}

/// One server process over stdio; requests go out as NDJSON lines and each
/// call reads exactly one response line back.
#[allow(dead_code)]
pub struct StdioServer {
    child: Child,
    stdin: ChildStdin,
    stdout: BufReader<ChildStdout>,
}

#[allow(dead_code)]
impl StdioServer {
    pub fn spawn(catalog_file: &Path) -> Self {
        let mut child = Command::new(env!("CARGO_BIN_EXE_mcp-brand-assets"))
            .args(["serve", "--stdio", "--catalog-file"])
            .arg(catalog_file)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()
            .expect("spawn server");
        let stdin = child.stdin.take().expect("stdin available");
        let stdout = BufReader::new(child.stdout.take().expect("stdout available"));
        Self {
            child,
            stdin,
            stdout,
        }
    }

    pub fn call(&mut self, request: serde_json::Value) -> serde_json::Value {
        let serialized = serde_json::to_string(&request).expect("serialize request");
        writeln!(self.stdin, "{serialized}").expect("write request");
        self.stdin.flush().expect("flush request");

        let mut line = String::new();
        self.stdout.read_line(&mut line).expect("read response");
        serde_json::from_str(line.trim()).expect("parse response")
    }

    pub fn call_tool(&mut self, id: u64, name: &str, arguments: serde_json::Value) -> serde_json::Value {
        let response = self.call(serde_json::json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": "tools/call",
            "params": {
                "name": name,
                "arguments": arguments
            }
        }));
        response
            .get("result")
            .cloned()
            .expect("result present")
    }
}

impl Drop for StdioServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
    }
}
