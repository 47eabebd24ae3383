//! Embedded HTML pages

pub const HOME_HTML: &str = r#"<!DOCTYPE html>
<html>
    <head>
        <title>🤖 Financial and Accounting Services Chatbot</title>
    </head>
    <body style="font-family: Arial, sans-serif; text-align: center; background-color: #f4f4f9; color: #333;">
        <h1>🤝 Welcome to the Financial and Accounting Services Chatbot! 💼</h1>
        <p>📩 Type a message to interact with the chatbot via the <strong>/chat</strong> endpoint.</p>
        <p>🔍 Need help? Just ask about our services! 🧾</p>
        <p>💬 Or use the <a href="/chat_ui">chat page</a>.</p>
    </body>
</html>
"#;

pub const CHAT_UI_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Interactive Chatbot</title>
    <style>
        body { font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; background: #f4f4f9; margin: 0; display: flex; justify-content: center; align-items: center; height: 100vh; }
        #chat-container { width: 100%; max-width: 600px; background: #fff; box-shadow: 0 4px 6px rgba(0,0,0,0.1); border-radius: 10px; overflow: hidden; display: flex; flex-direction: column; }
        #chatbox { flex: 1; padding: 20px; overflow-y: auto; background: #f9f9f9; min-height: 300px; }
        .message { margin: 10px 0; display: flex; }
        .message.bot { justify-content: flex-start; }
        .message.user { justify-content: flex-end; }
        .message-content { max-width: 70%; padding: 10px 15px; border-radius: 10px; font-size: 14px; line-height: 1.5; white-space: pre-wrap; }
        .message.bot .message-content { background: #e0e0e0; color: #333; }
        .message.user .message-content { background: #0078d7; color: #fff; }
        #input-container { display: flex; padding: 10px; border-top: 1px solid #ddd; }
        #message { flex: 1; border: 1px solid #ddd; border-radius: 5px; padding: 10px; font-size: 14px; outline: none; }
        #send { background: #0078d7; border: none; color: white; padding: 10px 15px; margin-left: 10px; border-radius: 5px; cursor: pointer; font-weight: bold; }
    </style>
    <script>
        let sessionId = null;

        async function sendMessage() {
            const messageInput = document.getElementById("message");
            const userMessage = messageInput.value.trim();
            if (!userMessage) return;

            appendMessage("user", userMessage);
            messageInput.value = "";

            try {
                const response = await fetch("/chat", {
                    method: "POST",
                    headers: { "Content-Type": "application/json" },
                    body: JSON.stringify({ message: userMessage, session_id: sessionId })
                });
                const data = await response.json();
                sessionId = data.session_id;
                appendMessage("bot", data.response);
            } catch (error) {
                appendMessage("bot", "Sorry, something went wrong. Please try again later.");
            }
        }

        function appendMessage(sender, text) {
            const chatbox = document.getElementById("chatbox");
            const messageElement = document.createElement("div");
            messageElement.className = "message " + sender;
            const content = document.createElement("div");
            content.className = "message-content";
            content.textContent = text;
            messageElement.appendChild(content);
            chatbox.appendChild(messageElement);
            chatbox.scrollTop = chatbox.scrollHeight;
        }
    </script>
</head>
<body>
    <div id="chat-container">
        <div id="chatbox"></div>
        <div id="input-container">
            <input type="text" id="message" placeholder="Type your message here..." onkeypress="if(event.key === 'Enter') sendMessage()" />
            <button id="send" onclick="sendMessage()">Send</button>
        </div>
    </div>
</body>
</html>
"#;
