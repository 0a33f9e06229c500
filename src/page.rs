//! The fixed status page served for every GET.
//! Used by: handlers::status.

/// The literal every status body carries.
pub const PLATFORM_NAME: &str = "GoatedVIPs Platform";

/// The complete status document. Served byte-for-byte identically for
/// every request; nothing in it varies.
pub const STATUS_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>GoatedVIPs Server</title>
    <style>
        body {
            font-family: Arial, sans-serif;
            max-width: 800px;
            margin: 0 auto;
            padding: 20px;
        }
        h1 {
            color: #f0ad4e;
        }
        .card {
            border: 1px solid #ddd;
            border-radius: 8px;
            padding: 20px;
            margin-bottom: 20px;
            background-color: #f9f9f9;
        }
    </style>
</head>
<body>
    <h1>GoatedVIPs Platform</h1>
    <div class="card">
        <h2>Server Status</h2>
        <p>✅ The server is running successfully!</p>
    </div>
    <div class="card">
        <h2>Platform Components</h2>
        <ul>
            <li>React/TypeScript Frontend</li>
            <li>Express.js Backend</li>
            <li>PostgreSQL Database with Drizzle ORM</li>
            <li>WebSocket for real-time communication</li>
            <li>Telegram Bot Integration</li>
        </ul>
    </div>
</body>
</html>
"#;
