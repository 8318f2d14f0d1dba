use axum::Json;
use serde_json::{Value, json};

/// GET /api-docs - OpenAPI 3.0 ドキュメント
pub async fn api_docs() -> Json<Value> {
    Json(openapi_document())
}

/// Books APIのOpenAPIドキュメントを組み立てる
pub fn openapi_document() -> Value {
    let id_parameter = json!({
        "in": "path",
        "name": "id",
        "required": true,
        "schema": { "type": "integer" }
    });
    let book_body = json!({
        "required": true,
        "content": {
            "application/json": {
                "schema": { "$ref": "#/components/schemas/BookInput" }
            }
        }
    });

    json!({
        "openapi": "3.0.0",
        "info": {
            "title": "Books API",
            "version": "1.0.0",
            "description": "A simple Books API with pagination and input validation"
        },
        "paths": {
            "/books": {
                "get": {
                    "summary": "Get all books",
                    "parameters": [
                        { "in": "query", "name": "page", "schema": { "type": "integer", "default": 1 } },
                        { "in": "query", "name": "limit", "schema": { "type": "integer", "default": 5 } }
                    ],
                    "responses": {
                        "200": {
                            "description": "Returns a page of books",
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/BookPage" }
                                }
                            }
                        }
                    }
                },
                "post": {
                    "summary": "Add a new book",
                    "requestBody": book_body.clone(),
                    "responses": {
                        "201": { "description": "Book added successfully" },
                        "400": { "description": "Invalid input" }
                    }
                }
            },
            "/books/{id}": {
                "get": {
                    "summary": "Get a book by ID",
                    "parameters": [id_parameter.clone()],
                    "responses": {
                        "200": { "description": "Returns a book" },
                        "404": { "description": "Book not found" }
                    }
                },
                "put": {
                    "summary": "Update an existing book",
                    "parameters": [id_parameter.clone()],
                    "requestBody": book_body,
                    "responses": {
                        "200": { "description": "Book updated successfully" },
                        "400": { "description": "Invalid input" },
                        "404": { "description": "Book not found" }
                    }
                },
                "delete": {
                    "summary": "Delete a book",
                    "parameters": [id_parameter],
                    "responses": {
                        "200": { "description": "Book deleted successfully" },
                        "404": { "description": "Book not found" }
                    }
                }
            }
        },
        "components": { "schemas": schemas() }
    })
}

fn schemas() -> Value {
    json!({
        "Book": {
            "type": "object",
            "properties": {
                "id": { "type": "integer" },
                "name": { "type": "string" },
                "author": { "type": "string" },
                "publishedYear": { "type": "integer", "minimum": 1000, "maximum": 9999 }
            }
        },
        "BookInput": {
            "type": "object",
            "required": ["name", "author", "publishedYear"],
            "properties": {
                "name": { "type": "string" },
                "author": { "type": "string" },
                "publishedYear": { "type": "integer", "minimum": 1000, "maximum": 9999 }
            }
        },
        "BookPage": {
            "type": "object",
            "properties": {
                "totalBooks": { "type": "integer" },
                "totalPages": { "type": "integer" },
                "currentPage": { "type": "integer" },
                "books": {
                    "type": "array",
                    "items": { "$ref": "#/components/schemas/Book" }
                }
            }
        }
    })
}
