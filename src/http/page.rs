/// Upload form served at `/`. Self-contained: styling and the async submit
/// script are inlined so the page works without any static file serving.
pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>CSV to SQLite Uploader</title>
    <style>
        body {
            font-family: Arial, sans-serif;
            max-width: 800px;
            margin: 0 auto;
            padding: 20px;
        }
        .container {
            border: 1px solid #ddd;
            padding: 20px;
            border-radius: 5px;
        }
        .form-group {
            margin-bottom: 15px;
        }
        label {
            display: block;
            margin-bottom: 5px;
        }
        .btn {
            background-color: #4CAF50;
            color: white;
            padding: 10px 15px;
            border: none;
            border-radius: 4px;
            cursor: pointer;
        }
        .btn:hover {
            background-color: #45a049;
        }
        .result {
            margin-top: 20px;
            padding: 10px;
            border-left: 3px solid #4CAF50;
            background-color: #f9f9f9;
            display: none;
        }
        .error {
            border-left-color: #f44336;
        }
    </style>
</head>
<body>
    <div class="container">
        <h1>CSV to SQLite Uploader</h1>
        <form id="uploadForm" enctype="multipart/form-data">
            <div class="form-group">
                <label for="csvFile">Select CSV file:</label>
                <input type="file" id="csvFile" name="file" accept=".csv" required>
            </div>
            <button type="submit" class="btn">Upload and store</button>
        </form>
        <div id="result" class="result"></div>
    </div>

    <script>
        document.getElementById('uploadForm').addEventListener('submit', async function(e) {
            e.preventDefault();

            const formData = new FormData();
            const fileInput = document.getElementById('csvFile');
            formData.append('file', fileInput.files[0]);

            const resultDiv = document.getElementById('result');
            resultDiv.style.display = 'none';
            resultDiv.classList.remove('error');

            try {
                const response = await fetch('/upload/', {
                    method: 'POST',
                    body: formData
                });

                const data = await response.json();
                resultDiv.textContent = data.message || data.detail;
                resultDiv.style.display = 'block';

                if (!response.ok) {
                    resultDiv.classList.add('error');
                }

                if (response.ok) {
                    document.getElementById('uploadForm').reset();
                }
            } catch (error) {
                resultDiv.textContent = 'Upload failed: ' + error.message;
                resultDiv.style.display = 'block';
                resultDiv.classList.add('error');
            }
        });
    </script>
</body>
</html>
"#;
